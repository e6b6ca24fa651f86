use clap::Parser;
use building_standards_toolbox::{app, cli::Cli, config};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = match cli.config.as_deref() {
        Some(path) => config::load_from(path)?,
        None => config::load_or_default()?,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cfg.log_level))
        .init();
    let output = app::run(&cfg, cli)?;
    println!("{output}");
    Ok(())
}
