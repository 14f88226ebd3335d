pub mod header;
pub mod filter_sidebar;
pub mod sort_bar;
pub mod product_grid;
pub mod footer;
