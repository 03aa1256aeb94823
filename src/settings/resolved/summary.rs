use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Theme: {}", config.theme);
	match &config.theme_dir {
		Some(dir) => println!("  Theme directory: {}", dir.display()),
		None => println!("  Theme directory: (none)"),
	}
	println!(
		"  Start story: {}",
		config.story.as_deref().unwrap_or("(overview)")
	);
	println!("  Tick rate: {} ms", config.tick_rate.as_millis());
	match &config.data {
		Some(path) => println!("  Custom data: {}", path.display()),
		None => println!("  Custom data: (none)"),
	}
	println!(
		"  Empty message: {}",
		config
			.empty_message
			.as_deref()
			.unwrap_or("(use the table default)")
	);
	println!("  Log level: {}", config.log_level);
	match &config.log_file {
		Some(path) => println!("  Log file: {}", path.display()),
		None => println!("  Log file: (cache directory)"),
	}
}
