// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use time::Date;

use crate::fields::{Fields, entity_fields};
use crate::forms::ValidationError;
use crate::ids::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Supplier,
    Apartment,
    Furniture,
    SubFamily,
    Material,
    Colour,
    Product,
    Proposal,
}

impl EntityKind {
    pub const ALL: [Self; 8] = [
        Self::Supplier,
        Self::Apartment,
        Self::Furniture,
        Self::SubFamily,
        Self::Material,
        Self::Colour,
        Self::Product,
        Self::Proposal,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Supplier => "supplier",
            Self::Apartment => "apartment",
            Self::Furniture => "furniture",
            Self::SubFamily => "sub_family",
            Self::Material => "material",
            Self::Colour => "colour",
            Self::Product => "product",
            Self::Proposal => "proposal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "supplier" => Some(Self::Supplier),
            "apartment" => Some(Self::Apartment),
            "furniture" => Some(Self::Furniture),
            "sub_family" => Some(Self::SubFamily),
            "material" => Some(Self::Material),
            "colour" => Some(Self::Colour),
            "product" => Some(Self::Product),
            "proposal" => Some(Self::Proposal),
            _ => None,
        }
    }

    /// Capitalized name used in notifications.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Supplier => "Supplier",
            Self::Apartment => "Apartment",
            Self::Furniture => "Furniture",
            Self::SubFamily => "Sub-family",
            Self::Material => "Material",
            Self::Colour => "Colour",
            Self::Product => "Product",
            Self::Proposal => "Proposal",
        }
    }

    pub const fn export_file_name(self) -> Option<&'static str> {
        match self {
            Self::Supplier => Some("suppliers.csv"),
            Self::Material => Some("materials.csv"),
            Self::Colour => Some("colours.csv"),
            Self::Product => Some("products.csv"),
            Self::Apartment | Self::Furniture | Self::SubFamily | Self::Proposal => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    CreatedOn,
    Field(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportColumn {
    pub header: &'static str,
    pub source: ColumnSource,
}

const fn column(header: &'static str, field: &'static str) -> ExportColumn {
    ExportColumn {
        header,
        source: ColumnSource::Field(field),
    }
}

/// A record type managed by a list screen.
pub trait Entity: Fields + Default + Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    const KIND: EntityKind;
    /// Fields that must be non-blank before a create or update reaches the store.
    const REQUIRED: &'static [&'static str];
    /// Fields matched by the search term.
    const SEARCH_FIELDS: &'static [&'static str];
    /// Fields matched by the filter term.
    const FILTER_FIELDS: &'static [&'static str];
    /// CSV layout; empty when the screen offers no export.
    const EXPORT_COLUMNS: &'static [ExportColumn] = &[];

    /// Rules beyond presence of required fields.
    fn check(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<E> {
    pub id: RecordId,
    #[serde(with = "iso_date")]
    pub created_on: Date,
    #[serde(flatten)]
    pub data: E,
}

fn invalid(kind: EntityKind, reason: &str) -> ValidationError {
    ValidationError::Invalid {
        entity: kind,
        reason: reason.to_owned(),
    }
}

fn check_percent(kind: EntityKind, name: &str, value: Option<f64>) -> Result<(), ValidationError> {
    if let Some(percent) = value
        && !(0.0..=100.0).contains(&percent)
    {
        return Err(invalid(kind, &format!("{name} must be between 0 and 100")));
    }
    Ok(())
}

fn check_non_negative(
    kind: EntityKind,
    name: &str,
    value: Option<f64>,
) -> Result<(), ValidationError> {
    if let Some(amount) = value
        && amount < 0.0
    {
        return Err(invalid(kind, &format!("{name} cannot be negative")));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub business_registration_number: String,
    pub primary_contact_name: String,
    pub primary_contact_position: String,
    pub secondary_contact_number: String,
    pub website_url: String,
    pub street_address_1: String,
    pub street_address_2: String,
    pub city: String,
    pub state_province: String,
    pub country: String,
    pub payment_terms: String,
    pub assembly_services: bool,
    pub delivery_time_weeks: Option<i64>,
    pub tax_number: String,
    pub supplier_discount: Option<f64>,
    pub active: bool,
}

impl Default for Supplier {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            business_registration_number: String::new(),
            primary_contact_name: String::new(),
            primary_contact_position: String::new(),
            secondary_contact_number: String::new(),
            website_url: String::new(),
            street_address_1: String::new(),
            street_address_2: String::new(),
            city: String::new(),
            state_province: String::new(),
            country: String::new(),
            payment_terms: String::new(),
            assembly_services: false,
            delivery_time_weeks: None,
            tax_number: String::new(),
            supplier_discount: None,
            active: true,
        }
    }
}

entity_fields!(Supplier {
    "name" => name,
    "email" => email,
    "phone_number" => phone_number,
    "business_registration_number" => business_registration_number,
    "primary_contact_name" => primary_contact_name,
    "primary_contact_position" => primary_contact_position,
    "secondary_contact_number" => secondary_contact_number,
    "website_url" => website_url,
    "street_address_1" => street_address_1,
    "street_address_2" => street_address_2,
    "city" => city,
    "state_province" => state_province,
    "country" => country,
    "payment_terms" => payment_terms,
    "assembly_services" => assembly_services,
    "delivery_time_weeks" => delivery_time_weeks,
    "tax_number" => tax_number,
    "supplier_discount" => supplier_discount,
    "active" => active,
});

impl Entity for Supplier {
    const KIND: EntityKind = EntityKind::Supplier;
    const REQUIRED: &'static [&'static str] = &[
        "name",
        "business_registration_number",
        "tax_number",
        "email",
        "phone_number",
        "street_address_1",
        "city",
        "state_province",
        "country",
        "payment_terms",
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "primary_contact_name"];
    const FILTER_FIELDS: &'static [&'static str] = &["city", "country", "state_province"];
    const EXPORT_COLUMNS: &'static [ExportColumn] = &[
        column("Name", "name"),
        column("Contact", "primary_contact_name"),
        column("Phone", "phone_number"),
        column("Email", "email"),
        column("City", "city"),
        column("Country", "country"),
        column("Payment Terms", "payment_terms"),
        column("Active", "active"),
    ];

    fn check(&self) -> Result<(), ValidationError> {
        if let Some(weeks) = self.delivery_time_weeks
            && weeks < 0
        {
            return Err(invalid(Self::KIND, "delivery time cannot be negative"));
        }
        check_percent(Self::KIND, "supplier discount", self.supplier_discount)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    pub name: String,
    pub kind: String,
    pub category: String,
    pub bedrooms: Option<i64>,
    pub floor_area_min: Option<f64>,
    pub floor_area_max: Option<f64>,
    pub description: String,
}

entity_fields!(Apartment {
    "name" => name,
    "kind" => kind,
    "category" => category,
    "bedrooms" => bedrooms,
    "floor_area_min" => floor_area_min,
    "floor_area_max" => floor_area_max,
    "description" => description,
});

impl Entity for Apartment {
    const KIND: EntityKind = EntityKind::Apartment;
    const REQUIRED: &'static [&'static str] = &[
        "name",
        "category",
        "bedrooms",
        "floor_area_min",
        "floor_area_max",
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "kind"];
    const FILTER_FIELDS: &'static [&'static str] = &["category", "description"];

    fn check(&self) -> Result<(), ValidationError> {
        if let Some(bedrooms) = self.bedrooms
            && bedrooms < 0
        {
            return Err(invalid(Self::KIND, "bedrooms cannot be negative"));
        }
        check_non_negative(Self::KIND, "minimum floor area", self.floor_area_min)?;
        if let (Some(min), Some(max)) = (self.floor_area_min, self.floor_area_max)
            && max < min
        {
            return Err(invalid(
                Self::KIND,
                "maximum floor area must be at least the minimum",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    pub name: String,
    pub category: String,
    pub sub_family: String,
    pub description: String,
}

entity_fields!(Furniture {
    "name" => name,
    "category" => category,
    "sub_family" => sub_family,
    "description" => description,
});

impl Entity for Furniture {
    const KIND: EntityKind = EntityKind::Furniture;
    const REQUIRED: &'static [&'static str] = &["name", "category", "sub_family"];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "category"];
    const FILTER_FIELDS: &'static [&'static str] = &["sub_family", "description"];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubFamily {
    pub family_name: String,
    pub sub_family_name: String,
    pub kind: String,
    pub description: String,
}

entity_fields!(SubFamily {
    "family_name" => family_name,
    "sub_family_name" => sub_family_name,
    "kind" => kind,
    "description" => description,
});

impl Entity for SubFamily {
    const KIND: EntityKind = EntityKind::SubFamily;
    const REQUIRED: &'static [&'static str] = &["family_name", "sub_family_name", "kind"];
    const SEARCH_FIELDS: &'static [&'static str] = &["family_name", "sub_family_name"];
    const FILTER_FIELDS: &'static [&'static str] = &["kind", "description"];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub kind: String,
    pub description: String,
}

entity_fields!(Material {
    "name" => name,
    "kind" => kind,
    "description" => description,
});

impl Entity for Material {
    const KIND: EntityKind = EntityKind::Material;
    const REQUIRED: &'static [&'static str] = &["name", "kind"];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "kind"];
    const FILTER_FIELDS: &'static [&'static str] = &["description"];
    const EXPORT_COLUMNS: &'static [ExportColumn] = &[
        column("Name", "name"),
        column("Type", "kind"),
        column("Description", "description"),
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Colour {
    pub name: String,
    pub code: String,
    pub description: String,
}

entity_fields!(Colour {
    "name" => name,
    "code" => code,
    "description" => description,
});

impl Entity for Colour {
    const KIND: EntityKind = EntityKind::Colour;
    const REQUIRED: &'static [&'static str] = &["name", "code"];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "code"];
    const FILTER_FIELDS: &'static [&'static str] = &["description"];
    const EXPORT_COLUMNS: &'static [ExportColumn] = &[
        column("Name", "name"),
        column("Code", "code"),
        column("Description", "description"),
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub sku: String,
    pub family: String,
    pub sub_family: String,
    pub status: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub price: Option<f64>,
    pub discount: Option<f64>,
    pub supplier: String,
    pub material: String,
    pub colour: String,
}

entity_fields!(Product {
    "name" => name,
    "sku" => sku,
    "family" => family,
    "sub_family" => sub_family,
    "status" => status,
    "width" => width,
    "height" => height,
    "length" => length,
    "price" => price,
    "discount" => discount,
    "supplier" => supplier,
    "material" => material,
    "colour" => colour,
});

impl Entity for Product {
    const KIND: EntityKind = EntityKind::Product;
    const REQUIRED: &'static [&'static str] = &[
        "name",
        "sku",
        "family",
        "sub_family",
        "status",
        "width",
        "height",
        "length",
        "price",
        "supplier",
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "sku"];
    const FILTER_FIELDS: &'static [&'static str] = &["family", "sub_family", "status"];
    const EXPORT_COLUMNS: &'static [ExportColumn] = &[
        ExportColumn {
            header: "Date",
            source: ColumnSource::CreatedOn,
        },
        column("Name", "name"),
        column("SKU", "sku"),
        column("Family", "family"),
        column("Sub Family", "sub_family"),
        column("Price", "price"),
        column("Supplier", "supplier"),
        column("Status", "status"),
    ];

    fn check(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("length", self.length),
            ("price", self.price),
        ] {
            check_non_negative(Self::KIND, name, value)?;
        }
        check_percent(Self::KIND, "discount", self.discount)
    }
}

/// A furniture requirement attached to a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub family: String,
    pub sub_family: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub name: String,
    pub apartment_name: String,
    pub client_info: String,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub discount: f64,
    pub status: String,
    pub requirements: Vec<Requirement>,
}

impl Default for Proposal {
    fn default() -> Self {
        Self {
            name: String::new(),
            apartment_name: String::new(),
            client_info: String::new(),
            quantity: Some(1),
            price: None,
            discount: 0.0,
            status: String::new(),
            requirements: Vec::new(),
        }
    }
}

entity_fields!(Proposal {
    "name" => name,
    "apartment_name" => apartment_name,
    "client_info" => client_info,
    "quantity" => quantity,
    "price" => price,
    "discount" => discount,
    "status" => status,
});

impl Entity for Proposal {
    const KIND: EntityKind = EntityKind::Proposal;
    const REQUIRED: &'static [&'static str] = &["name", "client_info", "quantity", "price"];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "client_info"];
    const FILTER_FIELDS: &'static [&'static str] = &["status"];

    fn check(&self) -> Result<(), ValidationError> {
        if let Some(quantity) = self.quantity
            && !(crate::pricing::MIN_QUANTITY..=crate::pricing::MAX_QUANTITY).contains(&quantity)
        {
            return Err(invalid(Self::KIND, "quantity must be between 1 and 99"));
        }
        check_non_negative(Self::KIND, "price", self.price)?;
        check_percent(Self::KIND, "discount", Some(self.discount))?;
        if self
            .requirements
            .iter()
            .any(|requirement| requirement.quantity == 0)
        {
            return Err(invalid(Self::KIND, "requirement quantity must be positive"));
        }
        Ok(())
    }
}
