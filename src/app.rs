use crate::config::Config;
use crate::scenario;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 시나리오 로드 오류
    Scenario(scenario::ScenarioError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Scenario(e) => write!(f, "시나리오 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<scenario::ScenarioError> for AppError {
    fn from(value: scenario::ScenarioError) -> Self {
        AppError::Scenario(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::RunScenario => {
                // 시나리오 오류는 세션을 끝내지 않고 메뉴로 돌아온다.
                if let Err(err) = ui_cli::handle_run_scenario(config) {
                    eprintln!("오류: {err}");
                }
            }
            MenuChoice::PipeTable => ui_cli::handle_pipe_table(),
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
