pub mod filter_bar;
pub mod group_info;
pub mod group_list;
pub mod map_view;
