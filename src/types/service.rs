//! Services offered by the shop and their list prices

use clap::ValueEnum;
use rust_decimal::Decimal;

/// A service that can be picked in the cut form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ServiceType {
    Cut,
    ScissorCut,
    Beard,
    Eyebrow,
    Hairline,
    Pigmentation,
    Relaxing,
    CutBeard,
    CutEyebrow,
    CutBeardEyebrow,
    CutFreestyle,
    Others,
}

impl ServiceType {
    /// Every service, in the order the form lists them
    pub const ALL: [ServiceType; 12] = [
        ServiceType::Cut,
        ServiceType::ScissorCut,
        ServiceType::Beard,
        ServiceType::Eyebrow,
        ServiceType::Hairline,
        ServiceType::Pigmentation,
        ServiceType::Relaxing,
        ServiceType::CutBeard,
        ServiceType::CutEyebrow,
        ServiceType::CutBeardEyebrow,
        ServiceType::CutFreestyle,
        ServiceType::Others,
    ];

    /// Label stored as the transaction description
    pub fn label(self) -> &'static str {
        match self {
            ServiceType::Cut => "Corte",
            ServiceType::ScissorCut => "Corte na Tesoura",
            ServiceType::Beard => "Barba",
            ServiceType::Eyebrow => "Sobrancelha",
            ServiceType::Hairline => "Pezinho",
            ServiceType::Pigmentation => "Pigmentação",
            ServiceType::Relaxing => "Relaxamento",
            ServiceType::CutBeard => "Corte + Barba",
            ServiceType::CutEyebrow => "Corte + Sobrancelha",
            ServiceType::CutBeardEyebrow => "Corte + Barba + Sobrancelha",
            ServiceType::CutFreestyle => "Corte + Freestyle",
            ServiceType::Others => "Outros",
        }
    }

    /// List price; zero means "no fixed price"
    pub fn price(self) -> Decimal {
        let units = match self {
            ServiceType::Cut => 25,
            ServiceType::ScissorCut => 30,
            ServiceType::Beard => 20,
            ServiceType::Eyebrow => 10,
            ServiceType::Hairline => 10,
            ServiceType::Pigmentation => 25,
            ServiceType::Relaxing => 40,
            ServiceType::CutBeard => 45,
            ServiceType::CutEyebrow => 30,
            ServiceType::CutBeardEyebrow => 50,
            ServiceType::CutFreestyle => 35,
            ServiceType::Others => 0,
        };
        Decimal::new(units, 0)
    }

    /// Look a service up by its stored label
    pub fn from_label(label: &str) -> Option<ServiceType> {
        Self::ALL.into_iter().find(|service| service.label() == label)
    }
}
