pub mod app;
pub mod create_order_dialog;
pub mod home_view;
pub mod login_view;
pub mod order_details;
pub mod order_row;
pub mod slide_button;
pub mod tab_bar;
