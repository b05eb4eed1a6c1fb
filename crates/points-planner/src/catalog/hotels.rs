use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotelProgram {
    pub id: &'static str,
    pub label: &'static str,
}

pub const MARRIOTT: &str = "marriott";
pub const HILTON: &str = "hilton";
pub const HYATT: &str = "hyatt";

pub(crate) static HOTEL_PROGRAMS: [HotelProgram; 7] = [
    HotelProgram {
        id: MARRIOTT,
        label: "Marriott Bonvoy",
    },
    HotelProgram {
        id: HILTON,
        label: "Hilton Honors",
    },
    HotelProgram {
        id: HYATT,
        label: "World of Hyatt",
    },
    HotelProgram {
        id: "ihg",
        label: "IHG One Rewards",
    },
    HotelProgram {
        id: "wyndham",
        label: "Wyndham Rewards",
    },
    HotelProgram {
        id: "choice",
        label: "Choice Privileges",
    },
    HotelProgram {
        id: "accor",
        label: "Accor Live Limitless",
    },
];
