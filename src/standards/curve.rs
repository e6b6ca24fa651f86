//! 성능 곡선 레코드 조회와 계산.

use super::dataset::StandardsData;
use super::record::ReferenceRecord;

pub const CURVES_TABLE: &str = "curves";

/// 곡선 형태.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveForm {
    Linear,
    Quadratic,
    Cubic,
    Biquadratic,
    QuadraticLinear,
}

impl CurveForm {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "linear" => Some(CurveForm::Linear),
            "quadratic" => Some(CurveForm::Quadratic),
            "cubic" => Some(CurveForm::Cubic),
            "biquadratic" => Some(CurveForm::Biquadratic),
            "quadraticlinear" => Some(CurveForm::QuadraticLinear),
            _ => None,
        }
    }

    /// 독립 변수 개수.
    pub fn dimensions(self) -> usize {
        match self {
            CurveForm::Linear | CurveForm::Quadratic | CurveForm::Cubic => 1,
            CurveForm::Biquadratic | CurveForm::QuadraticLinear => 2,
        }
    }
}

/// 계수와 입력 범위를 가진 성능 곡선.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub name: String,
    pub form: CurveForm,
    pub coefficients: [f64; 6],
    pub x_limits: (Option<f64>, Option<f64>),
    pub y_limits: (Option<f64>, Option<f64>),
}

impl Curve {
    /// `curves` 테이블 레코드에서 곡선을 만든다. 비어 있는 계수는 0으로 본다.
    pub fn from_record(record: &ReferenceRecord) -> Option<Curve> {
        let name = record.name()?.to_string();
        let form_text = record.text("form")?;
        let Some(form) = CurveForm::parse(form_text) else {
            log::warn!(target: "standards::curve", "{name}: 지원하지 않는 곡선 형태 {form_text}");
            return None;
        };
        let mut coefficients = [0.0; 6];
        for (i, c) in coefficients.iter_mut().enumerate() {
            *c = record.number(&format!("coeff_{}", i + 1)).unwrap_or(0.0);
        }
        Some(Curve {
            name,
            form,
            coefficients,
            x_limits: (
                record.number("minimum_independent_variable_1"),
                record.number("maximum_independent_variable_1"),
            ),
            y_limits: (
                record.number("minimum_independent_variable_2"),
                record.number("maximum_independent_variable_2"),
            ),
        })
    }

    /// 곡선을 계산한다. 입력은 범위로 자른다. 1변수 곡선은 `y`를 무시한다.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        let x = clamp(x, self.x_limits);
        let y = clamp(y, self.y_limits);
        let c = &self.coefficients;
        match self.form {
            CurveForm::Linear => c[0] + c[1] * x,
            CurveForm::Quadratic => c[0] + c[1] * x + c[2] * x * x,
            CurveForm::Cubic => c[0] + c[1] * x + c[2] * x * x + c[3] * x * x * x,
            CurveForm::Biquadratic => {
                c[0] + c[1] * x + c[2] * x * x + c[3] * y + c[4] * y * y + c[5] * x * y
            }
            CurveForm::QuadraticLinear => {
                c[0] + c[1] * x + c[2] * x * x + (c[3] + c[4] * x + c[5] * x * x) * y
            }
        }
    }
}

fn clamp(v: f64, limits: (Option<f64>, Option<f64>)) -> f64 {
    let v = limits.0.map_or(v, |min| v.max(min));
    limits.1.map_or(v, |max| v.min(max))
}

/// 이름으로 곡선을 찾는다. 없으면 경고 후 `None`.
pub fn find_curve(data: &StandardsData, name: &str) -> Option<Curve> {
    let criteria = super::criteria::SearchCriteria::new().with("name", name);
    match data.find(CURVES_TABLE, &criteria, None) {
        Some(record) => Curve::from_record(record),
        None => {
            log::warn!(target: "standards::curve", "곡선을 찾을 수 없음: {name}");
            None
        }
    }
}
