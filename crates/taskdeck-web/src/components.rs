mod dashboard;
mod login;
mod modal;
mod register;
mod task_card;
mod task_form;

pub use dashboard::Dashboard;
pub use login::Login;
pub use modal::Modal;
pub use register::Register;
pub use task_card::TaskCard;
pub use task_form::{TaskForm, TaskFormSubmit};
