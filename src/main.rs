use std::path::PathBuf;

use clap::Parser;

use gas_network_toolbox::{app, config, gas, report, scenario};

/// 압축가스 배관망 사이징 툴박스.
#[derive(Debug, Parser)]
#[command(name = "gas_network_toolbox")]
struct Cli {
    /// 시나리오 TOML 경로. 지정하면 메뉴 없이 바로 계산하고 종료한다.
    #[arg(short, long)]
    scenario: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;

    if let Some(path) = cli.scenario {
        let scenario = scenario::load(&path)?;
        let (inputs, geometry, candidates, drops) = scenario.to_engine();
        let result = gas::calculate(&inputs, &geometry, &candidates, &drops);
        println!("{}", report::render(&result, &inputs, &cfg.default_units));
        return Ok(());
    }

    app::run(&mut cfg)?;
    Ok(())
}
