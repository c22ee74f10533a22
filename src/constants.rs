/// User agent string used in HTTP requests to identify this client to the Face Log API
pub const USER_AGENT: &str = "facelog-client/0.1.0";
/// Base URL used when `FACELOG_API_URL` is not set
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";
/// Endpoint that exchanges a refresh token for a new access token
pub const TOKEN_REFRESH_PATH: &str = "auth/token/refresh/";
/// Endpoint that exchanges credentials for a token pair
pub const TOKEN_OBTAIN_PATH: &str = "auth/token/";
/// Endpoint for the authenticated user's profile
pub const PROFILE_PATH: &str = "auth/profile/";
/// Endpoint for apprentice self-registration
pub const REGISTER_STUDENT_PATH: &str = "auth/register/student/";
/// Content type applied to non-multipart bodies when the caller sets none
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Maximum number of bytes of an error body kept in error messages
pub const MAX_ERROR_BODY_LENGTH: usize = 500;
/// Route for users holding the instructor role
pub const INSTRUCTOR_LANDING_PATH: &str = "/dashboard/instructor";
/// Route for every other authenticated user
pub const APPRENTICE_LANDING_PATH: &str = "/dashboard/apprentice";
/// Route for unauthenticated users
pub const LOGIN_PATH: &str = "/login";
