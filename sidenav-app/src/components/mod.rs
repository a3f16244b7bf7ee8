//! Shared components of the shell: the side nav, the content area next to it and the
//! controls that open and close the nav.

pub mod layout;
pub mod locale_switch;
pub mod main_view;
pub mod nav_toggle;
pub mod side_nav;
