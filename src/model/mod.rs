/******************************************************************************
   Author: Face Log Team
   Date: 18/10/26
******************************************************************************/
/// Authentication request and response bodies
pub mod auth;
/// Authenticated request helper with token refresh
pub mod http;
/// Refresh coordination policy
pub mod refresh;
/// Request options, bodies and multipart forms
pub mod request;
/// Pagination envelopes and small response bodies
pub mod responses;
