pub mod poller_handle;
