use poem_openapi::Object;

/// Request model for operator login
#[derive(Object, Debug)]
pub struct LoginRequest {
    #[oai(validator(min_length = 1, max_length = 64))]
    pub login: String,
    #[oai(validator(min_length = 1))]
    pub password: String,
}

/// Response model for a successful login
#[derive(Object, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}
