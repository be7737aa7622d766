pub mod stop_list;
