pub mod api;
pub mod routing;
