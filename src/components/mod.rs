pub mod alert;
pub mod empty;
pub mod link_tool;
pub mod list_head;
pub mod modal;
pub mod pagination;
pub mod profile;
pub mod query_group;
pub mod question_list;
pub mod tab_bar;
pub mod user_info;
