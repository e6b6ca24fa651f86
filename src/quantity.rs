/// 기준 데이터와 모델 사이에서 오가는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Power,
    VolumeFlow,
    Pressure,
    Length,
    Volume,
    HeatTransferCoeff,
    ThermalResistance,
    Conductance,
    PowerPerFlow,
}

impl QuantityKind {
    /// 단위 문자열로 물리량을 추론할 때 시도하는 순서.
    pub const ALL: [QuantityKind; 9] = [
        QuantityKind::Power,
        QuantityKind::VolumeFlow,
        QuantityKind::Pressure,
        QuantityKind::Length,
        QuantityKind::Volume,
        QuantityKind::HeatTransferCoeff,
        QuantityKind::ThermalResistance,
        QuantityKind::Conductance,
        QuantityKind::PowerPerFlow,
    ];

    /// 로그/오류 메시지에 쓰는 이름.
    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::Power => "동력",
            QuantityKind::VolumeFlow => "체적 유량",
            QuantityKind::Pressure => "압력",
            QuantityKind::Length => "길이",
            QuantityKind::Volume => "체적",
            QuantityKind::HeatTransferCoeff => "열관류율",
            QuantityKind::ThermalResistance => "열저항",
            QuantityKind::Conductance => "열컨덕턴스",
            QuantityKind::PowerPerFlow => "유량당 동력",
        }
    }
}

/// 변환 결과와 추론된 물리량을 함께 담는다.
#[derive(Debug, Clone, Copy)]
pub struct QuantityValue {
    pub kind: QuantityKind,
    pub value: f64,
}
