mod label_setting;
mod state;

pub(crate) use label_setting::label_setting_search;
pub(crate) use state::SearchState;
