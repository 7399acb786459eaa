pub mod credentials_form;
pub mod download;
pub mod gate;
pub mod loading_state;
pub mod logout;
pub mod people_table;
pub mod registrant_grid;
pub mod scope;
pub mod search_panel;
