//! UI Components
//!
//! Leptos components for the landing page, the map and the side panel.

mod pantry_map;
mod side_nav;
mod pantry_controls;
mod find_panel;
mod host_pantry_form;
mod pantry_details;
mod running_for_office_form;
mod landing;

pub use pantry_map::PantryMap;
pub use side_nav::SideNav;
pub use pantry_controls::PantryControls;
pub use find_panel::FindPanel;
pub use host_pantry_form::HostPantryForm;
pub use pantry_details::PantryDetails;
pub use running_for_office_form::RunningForOfficeForm;
pub use landing::Landing;
