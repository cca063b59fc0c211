//! UI 组件

pub mod action_bar;
pub mod modal;
pub mod ship_form;
pub mod ship_list;
pub mod statusbar;
