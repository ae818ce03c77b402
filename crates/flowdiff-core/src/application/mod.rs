/// One comparison with cached derived views
pub mod comparison_service;
