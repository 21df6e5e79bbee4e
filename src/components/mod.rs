// Shared UI components
pub mod buttons;
pub mod forms;
pub mod layout;
pub mod modals;
pub mod notifications;
pub mod tables;
