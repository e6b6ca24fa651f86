//! 명령행 인자 정의.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "standards_toolbox")]
#[command(version, about = "건축물 에너지 기준표 조회 및 설비/외피 기준 적용 도구", long_about = None)]
pub struct Cli {
    /// 설정 파일 경로. 지정하지 않으면 ./config.toml (없으면 생성)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 기준 데이터 JSON 파일 또는 디렉터리. 설정의 data_path보다 우선한다.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 테이블에서 조건과 용량 구간에 맞는 레코드를 찾는다
    Lookup {
        /// 테이블 이름 (예: motors)
        #[arg(short, long)]
        table: String,

        /// `필드=값` 조건. 여러 번 지정 가능
        #[arg(short, long = "criteria", num_args = 1..)]
        criteria: Vec<String>,

        /// 용량 구간 값
        #[arg(long)]
        capacity: Option<f64>,

        /// 구간 밖이면 가장 가까운 레코드를 고른다
        #[arg(long)]
        nearest: bool,

        /// 와일드카드 값 (예: Any)
        #[arg(long)]
        wildcard: Option<String>,
    },
    /// 축동력에 맞는 전동기 효율과 명판 마력
    Motor {
        /// 축동력 (hp)
        #[arg(long)]
        bhp: f64,

        #[arg(long)]
        template: Option<String>,
    },
    /// 보일러 최소 열효율
    Boiler {
        /// 정격 용량 (W)
        #[arg(long)]
        capacity_w: f64,

        /// 엔진 연료 이름 (NaturalGas, Electricity, FuelOilNo2 ...)
        #[arg(long, default_value = "NaturalGas")]
        fuel: String,

        #[arg(long)]
        template: Option<String>,
    },
    /// 팬 기준 임펠러/전동기 효율
    Fan {
        /// 최대 풍량 (m³/s)
        #[arg(long)]
        flow_m3s: f64,

        /// 정압 상승 (Pa)
        #[arg(long)]
        pressure_pa: f64,

        /// standard | exhaust | fan-coil | terminal
        #[arg(long, default_value = "standard")]
        kind: String,

        #[arg(long)]
        template: Option<String>,
    },
    /// 단위 변환. 물리량은 단위 쌍에서 추론한다
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// 구조체 단열층을 조정해 목표 U값(IP)을 맞춘다
    UValue {
        /// 목표 U값 (Btu/h·ft²·°F)
        #[arg(long)]
        target: f64,

        /// 구조체 TOML 파일
        #[arg(long)]
        layers: PathBuf,

        /// 단열층 이름
        #[arg(long)]
        insulation: String,

        /// 표면 종류 (ExteriorWall, ExteriorRoof, ...)
        #[arg(long, default_value = "ExteriorWall")]
        surface: String,
    },
    /// 시트별 CSV를 테이블별 JSON으로 변환한다
    Export {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },
}
