mod model;
mod session;
