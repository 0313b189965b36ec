use crate::infra::api::{ReviewClient, ReviewMockServer};
use crate::shared::cookie::CookieJar;

use super::common::ApiContext;

/// Context pointing at `mock`, authenticated with token "test-token".
pub fn context(mock: &ReviewMockServer) -> ApiContext {
    ApiContext {
        client: ReviewClient::new(CookieJar::new("token=test-token")),
        props: mock.props(),
    }
}
