pub mod question_service;
pub mod quiz_service;
pub mod scoring;
