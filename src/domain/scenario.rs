use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A practice context the user picks before recording a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scenario {
    HotelRoomBooking,
    RestaurantInteraction,
    RetailNegotiation,
    JobInterviewPreparation,
    ProfessionalIntroduction,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::HotelRoomBooking,
        Scenario::RestaurantInteraction,
        Scenario::RetailNegotiation,
        Scenario::JobInterviewPreparation,
        Scenario::ProfessionalIntroduction,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::HotelRoomBooking => "Hotel Room Booking",
            Scenario::RestaurantInteraction => "Restaurant Interaction",
            Scenario::RetailNegotiation => "Retail Negotiation",
            Scenario::JobInterviewPreparation => "Job Interview Preparation",
            Scenario::ProfessionalIntroduction => "Professional Introduction",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::HotelRoomBooking => {
                "Practice booking a hotel room, discussing amenities, and handling special requests"
            }
            Scenario::RestaurantInteraction => {
                "Practice making reservations, ordering food, and communicating with restaurant staff"
            }
            Scenario::RetailNegotiation => {
                "Practice negotiating prices, discussing product features, and making purchases"
            }
            Scenario::JobInterviewPreparation => {
                "Practice common interview questions and professional responses"
            }
            Scenario::ProfessionalIntroduction => {
                "Practice introducing yourself in professional settings and networking events"
            }
        }
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown scenario: {}", wanted))
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
