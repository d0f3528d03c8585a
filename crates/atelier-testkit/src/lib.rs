// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use atelier_app::{
    Apartment, Colour, Furniture, Material, Product, Proposal, Record, RecordId, Requirement,
    SubFamily, Supplier,
};
use time::macros::date;
use time::{Date, Duration};

const FAMILIES: [(&str, &[&str]); 5] = [
    ("Living Room", &["Seating", "Tables", "Storage"]),
    ("Dining Room", &["Tables", "Seating"]),
    ("Bedroom", &["Beds", "Storage"]),
    ("Office", &["Seating", "Desks", "Storage"]),
    ("Outdoor", &["Seating", "Loungers"]),
];

const PIECES: [&str; 12] = [
    "Sofa",
    "Armchair",
    "Dining Table",
    "Bed Frame",
    "Bookshelf",
    "Wardrobe",
    "Sideboard",
    "Desk",
    "Ottoman",
    "Lounger",
    "Console",
    "Stool",
];

const STYLES: [&str; 10] = [
    "Modern",
    "Classic",
    "Nordic",
    "Rustic",
    "Industrial",
    "Coastal",
    "Velvet",
    "Walnut",
    "Rattan",
    "Minimal",
];

const MATERIAL_KINDS: [&str; 6] = [
    "Timber",
    "Upholstery",
    "Metal",
    "Stone",
    "Wall Covering",
    "Flooring",
];

const COLOUR_NAMES: [&str; 10] = [
    "Ivory", "Charcoal", "Sage", "Terracotta", "Navy", "Mustard", "Blush", "Slate", "Olive",
    "Sand",
];

const PRODUCT_STATUSES: [&str; 3] = ["In Stock", "Low Stock", "Out Of Stock"];
const PROPOSAL_STATUSES: [&str; 3] = ["Draft", "Finalized", "Approved"];

const SUPPLIER_SUFFIXES: [&str; 5] = ["Furnishings", "Interiors", "Trading", "Works", "Group"];
const FIRST_NAMES: [&str; 10] = [
    "Avery", "Jordan", "Sara", "Omar", "Layla", "Riley", "Hassan", "Noor", "Quinn", "Rowan",
];
const LAST_NAMES: [&str; 10] = [
    "Ali", "Khan", "Walker", "Haddad", "Reed", "Saleh", "Turner", "Nasser", "Brooks", "Farah",
];
const CITIES: [(&str, &str, &str); 6] = [
    ("Dubai", "Dubai", "UAE"),
    ("Abu Dhabi", "Abu Dhabi", "UAE"),
    ("Sharjah", "Sharjah", "UAE"),
    ("Doha", "Doha", "Qatar"),
    ("Riyadh", "Riyadh", "Saudi Arabia"),
    ("Muscat", "Muscat", "Oman"),
];
const PAYMENT_TERMS: [&str; 3] = ["Bank", "Credit Card", "Net 30"];

struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Seeded generator of plausible catalogue data. The same seed always
/// produces the same sequence.
pub struct CatalogueFaker {
    rng: DeterministicRng,
    serial: u32,
}

impl CatalogueFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            serial: 0,
        }
    }

    pub fn colour(&mut self) -> Colour {
        let name = self.pick(&COLOUR_NAMES);
        let code = format!("#{:06X}", self.rng.next_u64() & 0x00FF_FFFF);
        Colour {
            name: name.to_owned(),
            code,
            description: format!("{name} tone for {}.", self.pick(&["walls", "fabric", "trim"])),
        }
    }

    pub fn material(&mut self) -> Material {
        let kind = self.pick(&MATERIAL_KINDS);
        Material {
            name: format!("{} {kind}", self.pick(&STYLES)),
            kind: kind.to_owned(),
            description: format!("Sample {} finish.", kind.to_lowercase()),
        }
    }

    pub fn furniture(&mut self) -> Furniture {
        let (family, sub_family) = self.family();
        let piece = self.pick(&PIECES);
        Furniture {
            name: format!("{} {piece}", self.pick(&STYLES)),
            category: family.to_owned(),
            sub_family: sub_family.to_owned(),
            description: format!("{piece} for the {}.", family.to_lowercase()),
        }
    }

    pub fn sub_family(&mut self) -> SubFamily {
        let (family, sub_family) = self.family();
        SubFamily {
            family_name: family.to_owned(),
            sub_family_name: sub_family.to_owned(),
            kind: self.pick(&PIECES).to_owned(),
            description: String::new(),
        }
    }

    pub fn apartment(&mut self) -> Apartment {
        let bedrooms = self.int_range(1, 5);
        let floor_area_min = (self.int_range(5, 20) * 100) as f64;
        Apartment {
            name: format!("{} Residence", self.pick(&STYLES)),
            kind: self
                .pick(&["Apartment", "Condo", "Loft", "PentHouse"])
                .to_owned(),
            category: self
                .pick(&["Premium", "Luxury", "Modern", "Family"])
                .to_owned(),
            bedrooms: Some(bedrooms),
            floor_area_min: Some(floor_area_min),
            floor_area_max: Some(floor_area_min + (self.int_range(1, 6) * 100) as f64),
            description: String::new(),
        }
    }

    pub fn supplier(&mut self) -> Supplier {
        let (city, state, country) = CITIES[self.rng.int_n(CITIES.len())];
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        let name = format!("{last} {}", self.pick(&SUPPLIER_SUFFIXES));
        self.serial += 1;
        Supplier {
            email: format!("{}@{}.com", first.to_lowercase(), last.to_lowercase()),
            phone_number: format!(
                "555-{:03}-{:04}",
                self.int_range(100, 999),
                self.int_range(0, 9999)
            ),
            business_registration_number: format!("BRN-{:05}", self.serial),
            primary_contact_name: format!("{first} {last}"),
            street_address_1: format!("{} Al Wasl Road", self.int_range(1, 400)),
            city: city.to_owned(),
            state_province: state.to_owned(),
            country: country.to_owned(),
            payment_terms: self.pick(&PAYMENT_TERMS).to_owned(),
            assembly_services: self.rng.bool(),
            delivery_time_weeks: Some(self.int_range(1, 8)),
            tax_number: format!("TRN-{:08}", self.serial),
            active: true,
            name,
            ..Supplier::default()
        }
    }

    pub fn product(&mut self) -> Product {
        let (family, sub_family) = self.family();
        let piece = self.pick(&PIECES);
        self.serial += 1;
        let prefix: String = piece.chars().filter(char::is_ascii_alphabetic).take(3).collect();
        Product {
            name: format!("{} {piece}", self.pick(&STYLES)),
            sku: format!("{}-{:03}", prefix.to_uppercase(), self.serial),
            family: family.to_owned(),
            sub_family: sub_family.to_owned(),
            status: self.pick(&PRODUCT_STATUSES).to_owned(),
            width: Some(self.int_range(40, 240) as f64),
            height: Some(self.int_range(40, 200) as f64),
            length: Some(self.int_range(40, 240) as f64),
            price: Some(self.int_range(99, 2999) as f64 + 0.99),
            supplier: format!("{} {}", self.pick(&LAST_NAMES), self.pick(&SUPPLIER_SUFFIXES)),
            ..Product::default()
        }
    }

    pub fn proposal(&mut self) -> Proposal {
        self.serial += 1;
        let (family, sub_family) = self.family();
        Proposal {
            name: format!("Proposal {}", self.serial),
            apartment_name: format!("{} Residence", self.pick(&STYLES)),
            client_info: format!("{} {}", self.pick(&FIRST_NAMES), self.pick(&LAST_NAMES)),
            quantity: Some(self.int_range(1, 10)),
            price: Some((self.int_range(5, 40) * 100) as f64),
            discount: (self.int_range(0, 4) * 5) as f64,
            status: self.pick(&PROPOSAL_STATUSES).to_owned(),
            requirements: vec![Requirement {
                family: family.to_owned(),
                sub_family: sub_family.to_owned(),
                quantity: self.int_range(1, 6) as u32,
            }],
        }
    }

    /// Wraps `data` in records with consecutive ids from 1 and creation dates
    /// spread over the days after `start`.
    pub fn records<E>(&mut self, start: Date, data: Vec<E>) -> Vec<Record<E>> {
        data.into_iter()
            .zip(1_i64..)
            .map(|(data, id)| Record {
                id: RecordId::new(id),
                created_on: start + Duration::days(self.int_range(0, 365)),
                data,
            })
            .collect()
    }

    fn family(&mut self) -> (&'static str, &'static str) {
        let (family, subs) = FAMILIES[self.rng.int_n(FAMILIES.len())];
        (family, subs[self.rng.int_n(subs.len())])
    }

    fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items[self.rng.int_n(items.len())]
    }

    fn int_range(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = max - min + 1;
        min + (self.rng.next_u64() % (span as u64)) as i64
    }
}

/// Day every fixture without its own date was created on.
pub fn fixture_date() -> Date {
    date!(2022 - 11 - 11)
}

fn record<E>(id: i64, created_on: Date, data: E) -> Record<E> {
    Record {
        id: RecordId::new(id),
        created_on,
        data,
    }
}

pub fn colours() -> Vec<Record<Colour>> {
    [
        ("Red", "#FF0000", "Bright and bold red color."),
        ("Green", "#00FF00", "Vibrant green representing nature."),
        ("Blue", "#0000FF", "Calm and soothing blue hue."),
        ("Yellow", "#FFFF00", "Bright yellow for energy."),
        ("Purple", "#800080", "Royal purple for elegance."),
        ("Orange", "#FFA500", "Warm and inviting orange shade."),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, code, description), id)| {
        record(
            id,
            fixture_date(),
            Colour {
                name: name.to_owned(),
                code: code.to_owned(),
                description: description.to_owned(),
            },
        )
    })
    .collect()
}

pub fn materials() -> Vec<Record<Material>> {
    [
        ("Sofa", "Furniture", "Comfortable three-seater sofa."),
        ("Wallpaper", "Wall Covering", "Floral patterned wallpaper."),
        ("Curtain", "Window Treatment", "Blackout curtains for bedrooms."),
        ("Carpet", "Flooring", "Soft woolen carpet."),
        ("Lighting Fixture", "Lighting", "Modern chandelier."),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, kind, description), id)| {
        record(
            id,
            fixture_date(),
            Material {
                name: name.to_owned(),
                kind: kind.to_owned(),
                description: description.to_owned(),
            },
        )
    })
    .collect()
}

pub fn apartments() -> Vec<Record<Apartment>> {
    [
        (101, date!(2023 - 01 - 15), "Ocean Breeze", "Apartment", "Premium", 3, 1200.0, 1500.0),
        (102, date!(2023 - 02 - 20), "Mountain Retreat", "Condo", "Luxury", 2, 900.0, 1100.0),
        (103, date!(2023 - 03 - 10), "City Lights", "Loft", "Modern", 1, 600.0, 800.0),
        (104, date!(2023 - 04 - 05), "Green Meadows", "PentHouse", "Family", 4, 1800.0, 2200.0),
    ]
    .into_iter()
    .map(|(id, created_on, name, kind, category, bedrooms, min, max)| {
        record(
            id,
            created_on,
            Apartment {
                name: name.to_owned(),
                kind: kind.to_owned(),
                category: category.to_owned(),
                bedrooms: Some(bedrooms),
                floor_area_min: Some(min),
                floor_area_max: Some(max),
                description: String::new(),
            },
        )
    })
    .collect()
}

pub fn furniture() -> Vec<Record<Furniture>> {
    [
        (date!(2022 - 11 - 11), "Leather Sofa", "Living Room", "Seating", "Comfortable 3-seater leather sofa"),
        (date!(2022 - 12 - 15), "Dining Table Set", "Dining Room", "Tables", "Wooden dining table with six matching chairs"),
        (date!(2023 - 01 - 05), "Ergonomic Office Chair", "Office", "Seating", "Adjustable ergonomic chair with lumbar support"),
        (date!(2023 - 02 - 20), "Queen Size Bed Frame", "Bedroom", "Beds", "Modern queen-sized bed frame with storage drawers"),
        (date!(2023 - 03 - 10), "Bookshelf Unit", "Office", "Storage", "5-tier wooden bookshelf for office or home use"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((created_on, name, category, sub_family, description), id)| {
        record(
            id,
            created_on,
            Furniture {
                name: name.to_owned(),
                category: category.to_owned(),
                sub_family: sub_family.to_owned(),
                description: description.to_owned(),
            },
        )
    })
    .collect()
}

pub fn sub_families() -> Vec<Record<SubFamily>> {
    [
        ("Living Room", "Seating", "Sofa", "Comfortable and stylish seating"),
        ("Bedroom", "Storage", "Wardrobe", "Spacious wardrobe with sliding doors"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((family_name, sub_family_name, kind, description), id)| {
        record(
            id,
            fixture_date(),
            SubFamily {
                family_name: family_name.to_owned(),
                sub_family_name: sub_family_name.to_owned(),
                kind: kind.to_owned(),
                description: description.to_owned(),
            },
        )
    })
    .collect()
}

pub fn products() -> Vec<Record<Product>> {
    [
        (date!(2022 - 11 - 11), "Modern Sofa", "SOF-001", "Living Room", "Seating", 999.99, "FurnitureCo", "In Stock"),
        (date!(2022 - 11 - 12), "Classic Armchair", "CHA-002", "Living Room", "Seating", 499.99, "FurnitureCo", "Low Stock"),
        (date!(2022 - 11 - 13), "Wooden Dining Table", "TAB-003", "Dining Room", "Tables", 799.99, "HomeDecors", "Out Of Stock"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((created_on, name, sku, family, sub_family, price, supplier, status), id)| {
        record(
            id,
            created_on,
            Product {
                name: name.to_owned(),
                sku: sku.to_owned(),
                family: family.to_owned(),
                sub_family: sub_family.to_owned(),
                status: status.to_owned(),
                width: Some(90.0),
                height: Some(85.0),
                length: Some(200.0),
                price: Some(price),
                supplier: supplier.to_owned(),
                ..Product::default()
            },
        )
    })
    .collect()
}

pub fn proposals() -> Vec<Record<Proposal>> {
    [
        ("Proposal 1", "Sunset Apartments", "John Doe", 1, 1000.0, "Draft"),
        ("Proposal 2", "Studio", "Albert", 2, 1600.0, "Finalized"),
        ("Proposal 3", "Condo", "James", 1, 700.0, "Approved"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, apartment_name, client_info, quantity, price, status), id)| {
        record(
            id,
            fixture_date(),
            Proposal {
                name: name.to_owned(),
                apartment_name: apartment_name.to_owned(),
                client_info: client_info.to_owned(),
                quantity: Some(quantity),
                price: Some(price),
                status: status.to_owned(),
                ..Proposal::default()
            },
        )
    })
    .collect()
}

pub fn suppliers() -> Vec<Record<Supplier>> {
    vec![
        record(
            1,
            fixture_date(),
            Supplier {
                name: "Hussan Raza".to_owned(),
                email: "hassan@gmail.com".to_owned(),
                phone_number: "203-975-9424".to_owned(),
                business_registration_number: "0001000110".to_owned(),
                primary_contact_name: "Hassan".to_owned(),
                website_url: "https://www.abcsupplies.com".to_owned(),
                street_address_1: "12 Corniche Road".to_owned(),
                city: "Abu Dhabi".to_owned(),
                state_province: "NY".to_owned(),
                country: "UAE".to_owned(),
                payment_terms: "Bank".to_owned(),
                delivery_time_weeks: Some(2),
                tax_number: "10010101".to_owned(),
                ..Supplier::default()
            },
        ),
        record(
            2,
            fixture_date(),
            Supplier {
                name: "Global Tech Solutions".to_owned(),
                email: "sara@globaltech.com".to_owned(),
                phone_number: "555-123-4567".to_owned(),
                business_registration_number: "0002000220".to_owned(),
                primary_contact_name: "Sara Ali".to_owned(),
                website_url: "https://www.globaltech.com".to_owned(),
                street_address_1: "48 Sheikh Zayed Road".to_owned(),
                city: "Dubai".to_owned(),
                state_province: "Dubai".to_owned(),
                country: "UAE".to_owned(),
                payment_terms: "Credit Card".to_owned(),
                delivery_time_weeks: Some(3),
                tax_number: "20020202".to_owned(),
                ..Supplier::default()
            },
        ),
    ]
}
