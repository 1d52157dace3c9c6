pub mod menu_item;
pub mod pages;
pub mod qr_code;
pub mod restaurant;
