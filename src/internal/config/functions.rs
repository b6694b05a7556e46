pub mod plugin_options;
