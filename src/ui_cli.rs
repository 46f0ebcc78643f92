use std::io::{self, Write};
use std::path::Path;

use crate::app::AppError;
use crate::config::Config;
use crate::gas;
use crate::pipe_db;
use crate::report;
use crate::scenario;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RunScenario,
    PipeTable,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Gas Network Toolbox ===");
    println!("1) 시나리오 파일 계산");
    println!("2) 배관 치수표 (스케줄 40)");
    println!("3) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::RunScenario),
            "2" => return Ok(MenuChoice::PipeTable),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 시나리오 파일을 읽어 계산을 수행하고 결과 보고서를 출력한다.
pub fn handle_run_scenario(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 시나리오 계산 --");
    let default_path = cfg.default_scenario_path.clone().unwrap_or_default();
    let prompt = if default_path.is_empty() {
        "시나리오 TOML 경로: ".to_string()
    } else {
        format!("시나리오 TOML 경로 (엔터 = {default_path}): ")
    };
    let entered = read_line(&prompt)?;
    let path = if entered.trim().is_empty() {
        default_path
    } else {
        entered.trim().to_string()
    };
    if path.is_empty() {
        println!("경로가 지정되지 않았습니다.");
        return Ok(());
    }

    let scenario = scenario::load(Path::new(&path))?;
    let (inputs, geometry, candidates, drops) = scenario.to_engine();
    let result = gas::calculate(&inputs, &geometry, &candidates, &drops);
    println!("{}", report::render(&result, &inputs, &cfg.default_units));
    Ok(())
}

/// 스케줄 40 치수표를 출력한다.
pub fn handle_pipe_table() {
    println!("\n-- 스케줄 40 치수표 --");
    println!("호칭경     내경[in]");
    for pipe in pipe_db::schedule_40() {
        println!("{:8}  {:8.3}", pipe.nominal, pipe.inner_diameter_in);
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!(
        "현재 기본 시나리오 경로: {}",
        cfg.default_scenario_path.as_deref().unwrap_or("(없음)")
    );
    let entered = read_line("새 기본 경로 (취소하려면 엔터): ")?;
    if entered.trim().is_empty() {
        return Ok(());
    }
    cfg.default_scenario_path = Some(entered.trim().to_string());
    println!("기본 시나리오 경로가 설정되었습니다.");
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
