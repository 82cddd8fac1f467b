pub mod repository_modal_view_model;
pub mod search_view_model;
pub mod status_bar;

pub use repository_modal_view_model::{ModalBody, RepositoryModalViewModel, RepositoryRowViewModel};
pub use search_view_model::{
    PaginationViewModel, QueryInputViewModel, SearchViewModel, UserCardViewModel,
};
pub use status_bar::StatusBarViewModel;
