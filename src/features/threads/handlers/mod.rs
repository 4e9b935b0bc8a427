pub mod thread_handler;

pub use thread_handler::{
    __path_create_thread, __path_get_thread, __path_list_threads, create_thread, get_thread,
    list_threads,
};
