mod app_bar;
mod loading_overlay;
mod note_form;
mod note_list;

pub use app_bar::AppBar;
pub use loading_overlay::LoadingOverlay;
pub use note_form::NoteForm;
pub use note_list::NoteList;
