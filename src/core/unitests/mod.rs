#[cfg(test)] mod test_logger;
#[cfg(test)] mod test_config;
