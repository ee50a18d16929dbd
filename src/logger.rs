pub struct Logger;

impl Logger {
    pub fn start(level: log::Level) {
        #[cfg(target_os="android")]
        {
            android_logger::init_once(
                android_logger::Config::default().with_max_level(level.to_level_filter()),
            );
        }

        #[cfg(not(target_os="android"))]
        {
            env_logger::builder().filter_level(level.to_level_filter()).init();
        }
    }
}
