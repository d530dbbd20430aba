pub mod cached_test_handler;
pub mod exam_handler;
pub mod health_handler;
pub mod question_set_handler;

pub use cached_test_handler::{delete_cached_test, get_cached_test, list_cached_tests};
pub use exam_handler::{get_exam_result, submit_exam};
pub use health_handler::{health_check, health_check_ready};
pub use question_set_handler::{generate_question_set, get_question_set, list_question_sets};
