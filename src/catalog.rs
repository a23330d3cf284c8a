// ABOUTME: Static demo catalog data shown by the UniConnect dashboard
// ABOUTME: Partner directories, payment-method simulators, and featured dorm listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 UniConnect

//! # Demo Catalog
//!
//! Every "service" in the UniConnect demo is a hard-coded list: nearby
//! partner directories, payment-method simulators, and the featured
//! dormitory listings the assistant persona knows about. There is no
//! discovery, no geolocation, and no real payment initiation behind any of
//! this data.

use serde::Serialize;

// ============================================================================
// Service Partner Directories
// ============================================================================

/// Category of nearby service partners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    /// Laundry partners
    Laundry,
    /// Print and photocopy partners
    Print,
    /// Campus transport shelters
    Ojek,
}

impl ServiceCategory {
    /// All categories in display order
    pub const ALL: &'static [Self] = &[Self::Laundry, Self::Print, Self::Ojek];

    /// Stable identifier used on the command line
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Laundry => "laundry",
            Self::Print => "print",
            Self::Ojek => "ojek",
        }
    }

    /// Parse a command-line identifier
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "laundry" => Some(Self::Laundry),
            "print" => Some(Self::Print),
            "ojek" => Some(Self::Ojek),
            _ => None,
        }
    }
}

/// A hard-coded directory of nearby partners for one category
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDirectory {
    /// Category this directory belongs to
    pub category: ServiceCategory,
    /// Display heading
    pub title: &'static str,
    /// Partner entries, one display line each
    pub items: &'static [&'static str],
}

/// All partner directories shown on the dashboard
pub const SERVICE_DIRECTORIES: &[ServiceDirectory] = &[
    ServiceDirectory {
        category: ServiceCategory::Laundry,
        title: "Mitra Laundry Terverifikasi",
        items: &[
            "Laundry Kampus UIGM 1 (300m) - ⭐ 4.8",
            "Laundry Bersih Cepat (450m) - Buka 24 Jam",
            "Express Laundry (600m) - Diskon KTM 10%",
        ],
    },
    ServiceDirectory {
        category: ServiceCategory::Print,
        title: "Mitra Print & Photocopy",
        items: &[
            "Digital Printing UIGM (Lobby) - ⭐ 4.9",
            "PrintCepat Palembang (250m) - Kirim via WA",
            "Sinar Copy Center (400m) - Jilid Hardcover",
        ],
    },
    ServiceDirectory {
        category: ServiceCategory::Ojek,
        title: "Shelter & Transportasi",
        items: &[
            "Shelter Utama UIGM (Gate 1)",
            "Titik Jemput Ojol (Indomaret Seberang)",
            "Halte Transmusi (50m)",
        ],
    },
];

/// Look up the directory for one category
#[must_use]
pub const fn service_directory(category: ServiceCategory) -> &'static ServiceDirectory {
    // SERVICE_DIRECTORIES is ordered to match ServiceCategory::ALL
    match category {
        ServiceCategory::Laundry => &SERVICE_DIRECTORIES[0],
        ServiceCategory::Print => &SERVICE_DIRECTORIES[1],
        ServiceCategory::Ojek => &SERVICE_DIRECTORIES[2],
    }
}

// ============================================================================
// Payment-Method Simulators
// ============================================================================

/// A simulated payment method
///
/// Purely informational: the demo never initiates a payment, it only
/// displays the copy and an outbound link.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentSimulation {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub title: &'static str,
    /// Explanatory copy
    pub details: &'static str,
    /// Sub-entries (bank virtual-account options)
    pub items: &'static [&'static str],
    /// Label of the simulated action button
    pub action_label: &'static str,
    /// Outbound link, when the method has one
    pub action_url: Option<&'static str>,
}

/// All payment-method simulators shown on the dashboard
pub const PAYMENT_SIMULATIONS: &[PaymentSimulation] = &[
    PaymentSimulation {
        id: "gopay",
        title: "GoPay",
        details: "Pembayaran instan terhubung dengan aplikasi Gojek.",
        items: &[],
        action_label: "Buka Aplikasi GoPay",
        action_url: Some("https://www.gojek.com/gopay/"),
    },
    PaymentSimulation {
        id: "dana",
        title: "DANA",
        details: "Dompet digital untuk pembayaran non-tunai yang aman.",
        items: &[],
        action_label: "Buka Aplikasi DANA",
        action_url: Some("https://link.dana.id/"),
    },
    PaymentSimulation {
        id: "bank",
        title: "Virtual Account Bank",
        details: "Transfer otomatis diverifikasi sistem.",
        items: &[
            "Bank Mandiri (VA)",
            "Bank BCA (VA)",
            "Bank BRI (VA)",
            "Bank BNI (VA)",
        ],
        action_label: "Buat Nomor VA",
        action_url: None,
    },
];

// ============================================================================
// Featured Dormitory Listings
// ============================================================================

/// Occupancy restriction of a dormitory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Occupancy {
    /// Male-only
    Putra,
    /// Female-only
    Putri,
    /// Mixed
    Campur,
}

/// A resident review shown on a dorm card
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    /// Reviewer display name
    pub user: &'static str,
    /// Review text
    pub comment: &'static str,
    /// Star rating out of 5
    pub rating: f32,
    /// Relative date copy
    pub date: &'static str,
}

/// A featured dormitory listing
#[derive(Debug, Clone, Serialize)]
pub struct DormListing {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Occupancy restriction
    pub occupancy: Occupancy,
    /// Monthly price copy
    pub price: &'static str,
    /// Distance-from-campus copy
    pub distance: &'static str,
    /// Aggregate star rating out of 5
    pub rating: f32,
    /// Facility tags
    pub facilities: &'static [&'static str],
    /// Listing description
    pub description: &'static str,
    /// Resident reviews
    pub reviews: &'static [Review],
}

/// The featured dorm listings the assistant persona references
pub const DORM_LISTINGS: &[DormListing] = &[
    DormListing {
        id: "kos1",
        name: "Griya Cendekia Premium",
        occupancy: Occupancy::Putri,
        price: "Rp 1.500.000",
        distance: "200m dari Kampus",
        rating: 4.8,
        facilities: &[
            "AC",
            "WiFi Kencang",
            "K. Mandi Dalam",
            "Dapur Bersama",
            "Parkir Luas",
        ],
        description: "Kos eksklusif khusus putri dengan keamanan 24 jam. Lingkungan tenang \
                      sangat cocok untuk belajar. Tersedia layanan laundry kiloan di lantai dasar.",
        reviews: &[
            Review {
                user: "Sari M.",
                comment: "Tempatnya bersih banget, ibu kosnya ramah.",
                rating: 5.0,
                date: "2 hari lalu",
            },
            Review {
                user: "Dina A.",
                comment: "WiFi kencang buat nugas, mantap!",
                rating: 4.5,
                date: "1 minggu lalu",
            },
        ],
    },
    DormListing {
        id: "kos2",
        name: "Wisma Melati Hemat",
        occupancy: Occupancy::Campur,
        price: "Rp 850.000",
        distance: "500m dari Kampus",
        rating: 4.3,
        facilities: &["Kipas Angin", "WiFi", "K. Mandi Luar", "Bebas Jam Malam"],
        description: "Pilihan terbaik untuk mahasiswa hemat. Lokasi strategis dekat banyak \
                      warung makan murah. Gedung baru direnovasi.",
        reviews: &[Review {
            user: "Budi S.",
            comment: "Murah meriah, sesuai harga.",
            rating: 4.0,
            date: "3 minggu lalu",
        }],
    },
    DormListing {
        id: "kos3",
        name: "Kost Executive 88",
        occupancy: Occupancy::Putra,
        price: "Rp 2.100.000",
        distance: "100m dari Kampus",
        rating: 4.9,
        facilities: &["AC", "Smart TV", "Water Heater", "Gym", "Cleaning Service"],
        description: "Hunian mewah selangkah dari gerbang kampus. Fasilitas lengkap serasa \
                      di hotel. Listrik sudah termasuk biaya sewa.",
        reviews: &[
            Review {
                user: "Kevin J.",
                comment: "Fasilitas gym-nya oke banget.",
                rating: 5.0,
                date: "Kemarin",
            },
            Review {
                user: "Reza P.",
                comment: "Agak mahal tapi worth it.",
                rating: 4.8,
                date: "1 bulan lalu",
            },
        ],
    },
];
