//! Closed schema.org vocabularies for SEO structured data.
//!
//! Every enum here is a fixed tagged-variant set serialized under its
//! schema.org spelling. Wire spelling comes from [`as_str()`] / serde;
//! [`OrganizationType::label()`] carries the hierarchical form label
//! shown to content editors.
//!
//! [`as_str()`]: OrganizationType::as_str

use serde::{Deserialize, Serialize};

use crate::error::VocabularyError;

/// JSON-LD `@context` value used for all structured data emitted by
/// this workspace.
pub const SCHEMA_CONTEXT: &str = "http://schema.org";

/// `actionPlatform` URIs attached to every structured-data action
/// target.
pub const ACTION_PLATFORMS: [&str; 3] = [
    "http://schema.org/DesktopWebPlatform",
    "http://schema.org/IOSPlatform",
    "http://schema.org/AndroidPlatform",
];

// ============ Organization Vocabulary ============

/// schema.org Organization type identifier.
///
/// The closed vocabulary offered for the organization structured-data
/// field. Covers `Organization`, its direct subtypes, and the full
/// `LocalBusiness` family. An unset organization type disables
/// structured data for the page entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum OrganizationType {
    Organization,
    Airline,
    Corporation,
    EducationalOrganization,
    // EducationalOrganization subtypes
    CollegeOrUniversity,
    ElementarySchool,
    HighSchool,
    MiddleSchool,
    Preschool,
    School,
    GovernmentOrganization,
    LocalBusiness,
    // LocalBusiness subtypes
    AnimalShelter,
    AutomotiveBusiness,
    AutoBodyShop,
    AutoDealer,
    AutoPartsStore,
    AutoRental,
    AutoRepair,
    AutoWash,
    GasStation,
    MotorcycleDealer,
    MotorcycleRepair,
    ChildCare,
    Dentist,
    DryCleaningOrLaundry,
    EmergencyService,
    FireStation,
    Hospital,
    PoliceStation,
    EmploymentAgency,
    EntertainmentBusiness,
    AdultEntertainment,
    AmusementPark,
    ArtGallery,
    Casino,
    ComedyClub,
    MovieTheater,
    NightClub,
    FinancialService,
    AccountingService,
    AutomatedTeller,
    BankOrCreditUnion,
    InsuranceAgency,
    FoodEstablishment,
    Bakery,
    BarOrPub,
    Brewery,
    CafeOrCoffeeShop,
    FastFoodRestaurant,
    IceCreamShop,
    Restaurant,
    Winery,
    GovernmentOffice,
    PostOffice,
    HealthAndBeautyBusiness,
    BeautySalon,
    DaySpa,
    HairSalon,
    HealthClub,
    NailSalon,
    TattooParlor,
    HomeAndConstructionBusiness,
    Electrician,
    GeneralContractor,
    #[serde(rename = "HVACBusiness")]
    HvacBusiness,
    HousePainter,
    Locksmith,
    MovingCompany,
    Plumber,
    RoofingContractor,
    InternetCafe,
    LegalService,
    Attorney,
    Notary,
    Library,
    LodgingBusiness,
    BedAndBreakfast,
    Campground,
    Hostel,
    Hotel,
    Motel,
    Resort,
    ProfessionalService,
    RadioStation,
    RealEstateAgent,
    RecyclingCenter,
    SelfStorage,
    ShoppingCenter,
    SportsActivityLocation,
    BowlingAlley,
    ExerciseGym,
    GolfCourse,
    PublicSwimmingPool,
    SkiResort,
    SportsClub,
    StadiumOrArena,
    TennisComplex,
    Store,
    BikeStore,
    BookStore,
    ClothingStore,
    ComputerStore,
    ConvenienceStore,
    DepartmentStore,
    ElectronicsStore,
    Florist,
    FurnitureStore,
    GardenStore,
    GroceryStore,
    HardwareStore,
    HobbyShop,
    HomeGoodsStore,
    JewelryStore,
    LiquorStore,
    MensClothingStore,
    MobilePhoneStore,
    MovieRentalStore,
    MusicStore,
    OfficeEquipmentStore,
    OutletStore,
    PawnShop,
    PetStore,
    ShoeStore,
    SportingGoodsStore,
    TireShop,
    ToyStore,
    WholesaleStore,
    TelevisionStation,
    TouristInformationCenter,
    TravelAgency,
    MedicalOrganization,
    // MedicalOrganization subtypes
    Pharmacy,
    Physician,
    #[serde(rename = "NGO")]
    Ngo,
    PerformingGroup,
    // PerformingGroup subtypes
    DanceGroup,
    MusicGroup,
    TheaterGroup,
    SportsOrganization,
    // SportsOrganization subtypes
    SportsTeam,
}

impl OrganizationType {
    /// Every vocabulary entry, in form-choice order.
    pub const ALL: &'static [Self] = &[
        Self::Organization,
        Self::Airline,
        Self::Corporation,
        Self::EducationalOrganization,
        Self::CollegeOrUniversity,
        Self::ElementarySchool,
        Self::HighSchool,
        Self::MiddleSchool,
        Self::Preschool,
        Self::School,
        Self::GovernmentOrganization,
        Self::LocalBusiness,
        Self::AnimalShelter,
        Self::AutomotiveBusiness,
        Self::AutoBodyShop,
        Self::AutoDealer,
        Self::AutoPartsStore,
        Self::AutoRental,
        Self::AutoRepair,
        Self::AutoWash,
        Self::GasStation,
        Self::MotorcycleDealer,
        Self::MotorcycleRepair,
        Self::ChildCare,
        Self::Dentist,
        Self::DryCleaningOrLaundry,
        Self::EmergencyService,
        Self::FireStation,
        Self::Hospital,
        Self::PoliceStation,
        Self::EmploymentAgency,
        Self::EntertainmentBusiness,
        Self::AdultEntertainment,
        Self::AmusementPark,
        Self::ArtGallery,
        Self::Casino,
        Self::ComedyClub,
        Self::MovieTheater,
        Self::NightClub,
        Self::FinancialService,
        Self::AccountingService,
        Self::AutomatedTeller,
        Self::BankOrCreditUnion,
        Self::InsuranceAgency,
        Self::FoodEstablishment,
        Self::Bakery,
        Self::BarOrPub,
        Self::Brewery,
        Self::CafeOrCoffeeShop,
        Self::FastFoodRestaurant,
        Self::IceCreamShop,
        Self::Restaurant,
        Self::Winery,
        Self::GovernmentOffice,
        Self::PostOffice,
        Self::HealthAndBeautyBusiness,
        Self::BeautySalon,
        Self::DaySpa,
        Self::HairSalon,
        Self::HealthClub,
        Self::NailSalon,
        Self::TattooParlor,
        Self::HomeAndConstructionBusiness,
        Self::Electrician,
        Self::GeneralContractor,
        Self::HvacBusiness,
        Self::HousePainter,
        Self::Locksmith,
        Self::MovingCompany,
        Self::Plumber,
        Self::RoofingContractor,
        Self::InternetCafe,
        Self::LegalService,
        Self::Attorney,
        Self::Notary,
        Self::Library,
        Self::LodgingBusiness,
        Self::BedAndBreakfast,
        Self::Campground,
        Self::Hostel,
        Self::Hotel,
        Self::Motel,
        Self::Resort,
        Self::ProfessionalService,
        Self::RadioStation,
        Self::RealEstateAgent,
        Self::RecyclingCenter,
        Self::SelfStorage,
        Self::ShoppingCenter,
        Self::SportsActivityLocation,
        Self::BowlingAlley,
        Self::ExerciseGym,
        Self::GolfCourse,
        Self::PublicSwimmingPool,
        Self::SkiResort,
        Self::SportsClub,
        Self::StadiumOrArena,
        Self::TennisComplex,
        Self::Store,
        Self::BikeStore,
        Self::BookStore,
        Self::ClothingStore,
        Self::ComputerStore,
        Self::ConvenienceStore,
        Self::DepartmentStore,
        Self::ElectronicsStore,
        Self::Florist,
        Self::FurnitureStore,
        Self::GardenStore,
        Self::GroceryStore,
        Self::HardwareStore,
        Self::HobbyShop,
        Self::HomeGoodsStore,
        Self::JewelryStore,
        Self::LiquorStore,
        Self::MensClothingStore,
        Self::MobilePhoneStore,
        Self::MovieRentalStore,
        Self::MusicStore,
        Self::OfficeEquipmentStore,
        Self::OutletStore,
        Self::PawnShop,
        Self::PetStore,
        Self::ShoeStore,
        Self::SportingGoodsStore,
        Self::TireShop,
        Self::ToyStore,
        Self::WholesaleStore,
        Self::TelevisionStation,
        Self::TouristInformationCenter,
        Self::TravelAgency,
        Self::MedicalOrganization,
        Self::Pharmacy,
        Self::Physician,
        Self::Ngo,
        Self::PerformingGroup,
        Self::DanceGroup,
        Self::MusicGroup,
        Self::TheaterGroup,
        Self::SportsOrganization,
        Self::SportsTeam,
    ];

    /// The schema.org spelling of this type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::Airline => "Airline",
            Self::Corporation => "Corporation",
            Self::EducationalOrganization => "EducationalOrganization",
            Self::CollegeOrUniversity => "CollegeOrUniversity",
            Self::ElementarySchool => "ElementarySchool",
            Self::HighSchool => "HighSchool",
            Self::MiddleSchool => "MiddleSchool",
            Self::Preschool => "Preschool",
            Self::School => "School",
            Self::GovernmentOrganization => "GovernmentOrganization",
            Self::LocalBusiness => "LocalBusiness",
            Self::AnimalShelter => "AnimalShelter",
            Self::AutomotiveBusiness => "AutomotiveBusiness",
            Self::AutoBodyShop => "AutoBodyShop",
            Self::AutoDealer => "AutoDealer",
            Self::AutoPartsStore => "AutoPartsStore",
            Self::AutoRental => "AutoRental",
            Self::AutoRepair => "AutoRepair",
            Self::AutoWash => "AutoWash",
            Self::GasStation => "GasStation",
            Self::MotorcycleDealer => "MotorcycleDealer",
            Self::MotorcycleRepair => "MotorcycleRepair",
            Self::ChildCare => "ChildCare",
            Self::Dentist => "Dentist",
            Self::DryCleaningOrLaundry => "DryCleaningOrLaundry",
            Self::EmergencyService => "EmergencyService",
            Self::FireStation => "FireStation",
            Self::Hospital => "Hospital",
            Self::PoliceStation => "PoliceStation",
            Self::EmploymentAgency => "EmploymentAgency",
            Self::EntertainmentBusiness => "EntertainmentBusiness",
            Self::AdultEntertainment => "AdultEntertainment",
            Self::AmusementPark => "AmusementPark",
            Self::ArtGallery => "ArtGallery",
            Self::Casino => "Casino",
            Self::ComedyClub => "ComedyClub",
            Self::MovieTheater => "MovieTheater",
            Self::NightClub => "NightClub",
            Self::FinancialService => "FinancialService",
            Self::AccountingService => "AccountingService",
            Self::AutomatedTeller => "AutomatedTeller",
            Self::BankOrCreditUnion => "BankOrCreditUnion",
            Self::InsuranceAgency => "InsuranceAgency",
            Self::FoodEstablishment => "FoodEstablishment",
            Self::Bakery => "Bakery",
            Self::BarOrPub => "BarOrPub",
            Self::Brewery => "Brewery",
            Self::CafeOrCoffeeShop => "CafeOrCoffeeShop",
            Self::FastFoodRestaurant => "FastFoodRestaurant",
            Self::IceCreamShop => "IceCreamShop",
            Self::Restaurant => "Restaurant",
            Self::Winery => "Winery",
            Self::GovernmentOffice => "GovernmentOffice",
            Self::PostOffice => "PostOffice",
            Self::HealthAndBeautyBusiness => "HealthAndBeautyBusiness",
            Self::BeautySalon => "BeautySalon",
            Self::DaySpa => "DaySpa",
            Self::HairSalon => "HairSalon",
            Self::HealthClub => "HealthClub",
            Self::NailSalon => "NailSalon",
            Self::TattooParlor => "TattooParlor",
            Self::HomeAndConstructionBusiness => "HomeAndConstructionBusiness",
            Self::Electrician => "Electrician",
            Self::GeneralContractor => "GeneralContractor",
            Self::HvacBusiness => "HVACBusiness",
            Self::HousePainter => "HousePainter",
            Self::Locksmith => "Locksmith",
            Self::MovingCompany => "MovingCompany",
            Self::Plumber => "Plumber",
            Self::RoofingContractor => "RoofingContractor",
            Self::InternetCafe => "InternetCafe",
            Self::LegalService => "LegalService",
            Self::Attorney => "Attorney",
            Self::Notary => "Notary",
            Self::Library => "Library",
            Self::LodgingBusiness => "LodgingBusiness",
            Self::BedAndBreakfast => "BedAndBreakfast",
            Self::Campground => "Campground",
            Self::Hostel => "Hostel",
            Self::Hotel => "Hotel",
            Self::Motel => "Motel",
            Self::Resort => "Resort",
            Self::ProfessionalService => "ProfessionalService",
            Self::RadioStation => "RadioStation",
            Self::RealEstateAgent => "RealEstateAgent",
            Self::RecyclingCenter => "RecyclingCenter",
            Self::SelfStorage => "SelfStorage",
            Self::ShoppingCenter => "ShoppingCenter",
            Self::SportsActivityLocation => "SportsActivityLocation",
            Self::BowlingAlley => "BowlingAlley",
            Self::ExerciseGym => "ExerciseGym",
            Self::GolfCourse => "GolfCourse",
            Self::PublicSwimmingPool => "PublicSwimmingPool",
            Self::SkiResort => "SkiResort",
            Self::SportsClub => "SportsClub",
            Self::StadiumOrArena => "StadiumOrArena",
            Self::TennisComplex => "TennisComplex",
            Self::Store => "Store",
            Self::BikeStore => "BikeStore",
            Self::BookStore => "BookStore",
            Self::ClothingStore => "ClothingStore",
            Self::ComputerStore => "ComputerStore",
            Self::ConvenienceStore => "ConvenienceStore",
            Self::DepartmentStore => "DepartmentStore",
            Self::ElectronicsStore => "ElectronicsStore",
            Self::Florist => "Florist",
            Self::FurnitureStore => "FurnitureStore",
            Self::GardenStore => "GardenStore",
            Self::GroceryStore => "GroceryStore",
            Self::HardwareStore => "HardwareStore",
            Self::HobbyShop => "HobbyShop",
            Self::HomeGoodsStore => "HomeGoodsStore",
            Self::JewelryStore => "JewelryStore",
            Self::LiquorStore => "LiquorStore",
            Self::MensClothingStore => "MensClothingStore",
            Self::MobilePhoneStore => "MobilePhoneStore",
            Self::MovieRentalStore => "MovieRentalStore",
            Self::MusicStore => "MusicStore",
            Self::OfficeEquipmentStore => "OfficeEquipmentStore",
            Self::OutletStore => "OutletStore",
            Self::PawnShop => "PawnShop",
            Self::PetStore => "PetStore",
            Self::ShoeStore => "ShoeStore",
            Self::SportingGoodsStore => "SportingGoodsStore",
            Self::TireShop => "TireShop",
            Self::ToyStore => "ToyStore",
            Self::WholesaleStore => "WholesaleStore",
            Self::TelevisionStation => "TelevisionStation",
            Self::TouristInformationCenter => "TouristInformationCenter",
            Self::TravelAgency => "TravelAgency",
            Self::MedicalOrganization => "MedicalOrganization",
            Self::Pharmacy => "Pharmacy",
            Self::Physician => "Physician",
            Self::Ngo => "NGO",
            Self::PerformingGroup => "PerformingGroup",
            Self::DanceGroup => "DanceGroup",
            Self::MusicGroup => "MusicGroup",
            Self::TheaterGroup => "TheaterGroup",
            Self::SportsOrganization => "SportsOrganization",
            Self::SportsTeam => "SportsTeam",
        }
    }

    /// Hierarchical label for form building, mirroring the
    /// schema.org type tree (e.g. `"Organization > LocalBusiness > Bakery"`).
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::Airline => "Organization > Airline",
            Self::Corporation => "Organization > Corporation",
            Self::EducationalOrganization => "Organization > EducationalOrganization",
            Self::CollegeOrUniversity => "Organization > EducationalOrganization > CollegeOrUniversity",
            Self::ElementarySchool => "Organization > EducationalOrganization > ElementarySchool",
            Self::HighSchool => "Organization > EducationalOrganization > HighSchool",
            Self::MiddleSchool => "Organization > EducationalOrganization > MiddleSchool",
            Self::Preschool => "Organization > EducationalOrganization > Preschool",
            Self::School => "Organization > EducationalOrganization > School",
            Self::GovernmentOrganization => "Organization > GovernmentOrganization",
            Self::LocalBusiness => "Organization > LocalBusiness",
            Self::AnimalShelter => "Organization > LocalBusiness > AnimalShelter",
            Self::AutomotiveBusiness => "Organization > LocalBusiness > AutomotiveBusiness",
            Self::AutoBodyShop => "Organization > LocalBusiness > AutomotiveBusiness > AutoBodyShop",
            Self::AutoDealer => "Organization > LocalBusiness > AutomotiveBusiness > AutoDealer",
            Self::AutoPartsStore => "Organization > LocalBusiness > AutomotiveBusiness > AutoPartsStore",
            Self::AutoRental => "Organization > LocalBusiness > AutomotiveBusiness > AutoRental",
            Self::AutoRepair => "Organization > LocalBusiness > AutomotiveBusiness > AutoRepair",
            Self::AutoWash => "Organization > LocalBusiness > AutomotiveBusiness > AutoWash",
            Self::GasStation => "Organization > LocalBusiness > AutomotiveBusiness > GasStation",
            Self::MotorcycleDealer => "Organization > LocalBusiness > AutomotiveBusiness > MotorcycleDealer",
            Self::MotorcycleRepair => "Organization > LocalBusiness > AutomotiveBusiness > MotorcycleRepair",
            Self::ChildCare => "Organization > LocalBusiness > ChildCare",
            Self::Dentist => "Organization > LocalBusiness > Dentist",
            Self::DryCleaningOrLaundry => "Organization > LocalBusiness > DryCleaningOrLaundry",
            Self::EmergencyService => "Organization > LocalBusiness > EmergencyService",
            Self::FireStation => "Organization > LocalBusiness > EmergencyService > FireStation",
            Self::Hospital => "Organization > LocalBusiness > EmergencyService > Hospital",
            Self::PoliceStation => "Organization > LocalBusiness > EmergencyService > PoliceStation",
            Self::EmploymentAgency => "Organization > LocalBusiness > EmploymentAgency",
            Self::EntertainmentBusiness => "Organization > LocalBusiness > EntertainmentBusiness",
            Self::AdultEntertainment => "Organization > LocalBusiness > EntertainmentBusiness > AdultEntertainment",
            Self::AmusementPark => "Organization > LocalBusiness > EntertainmentBusiness > AmusementPark",
            Self::ArtGallery => "Organization > LocalBusiness > EntertainmentBusiness > ArtGallery",
            Self::Casino => "Organization > LocalBusiness > EntertainmentBusiness > Casino",
            Self::ComedyClub => "Organization > LocalBusiness > EntertainmentBusiness > ComedyClub",
            Self::MovieTheater => "Organization > LocalBusiness > EntertainmentBusiness > MovieTheater",
            Self::NightClub => "Organization > LocalBusiness > EntertainmentBusiness > NightClub",
            Self::FinancialService => "Organization > LocalBusiness > FinancialService",
            Self::AccountingService => "Organization > LocalBusiness > FinancialService > AccountingService",
            Self::AutomatedTeller => "Organization > LocalBusiness > FinancialService > AutomatedTeller",
            Self::BankOrCreditUnion => "Organization > LocalBusiness > FinancialService > BankOrCreditUnion",
            Self::InsuranceAgency => "Organization > LocalBusiness > FinancialService > InsuranceAgency",
            Self::FoodEstablishment => "Organization > LocalBusiness > FoodEstablishment",
            Self::Bakery => "Organization > LocalBusiness > FoodEstablishment > Bakery",
            Self::BarOrPub => "Organization > LocalBusiness > FoodEstablishment > BarOrPub",
            Self::Brewery => "Organization > LocalBusiness > FoodEstablishment > Brewery",
            Self::CafeOrCoffeeShop => "Organization > LocalBusiness > FoodEstablishment > CafeOrCoffeeShop",
            Self::FastFoodRestaurant => "Organization > LocalBusiness > FoodEstablishment > FastFoodRestaurant",
            Self::IceCreamShop => "Organization > LocalBusiness > FoodEstablishment > IceCreamShop",
            Self::Restaurant => "Organization > LocalBusiness > FoodEstablishment > Restaurant",
            Self::Winery => "Organization > LocalBusiness > FoodEstablishment > Winery",
            Self::GovernmentOffice => "Organization > LocalBusiness > GovernmentOffice",
            Self::PostOffice => "Organization > LocalBusiness > GovernmentOffice > PostOffice",
            Self::HealthAndBeautyBusiness => "Organization > LocalBusiness > HealthAndBeautyBusiness",
            Self::BeautySalon => "Organization > LocalBusiness > HealthAndBeautyBusiness > BeautySalon",
            Self::DaySpa => "Organization > LocalBusiness > HealthAndBeautyBusiness > DaySpa",
            Self::HairSalon => "Organization > LocalBusiness > HealthAndBeautyBusiness > HairSalon",
            Self::HealthClub => "Organization > LocalBusiness > HealthAndBeautyBusiness > HealthClub",
            Self::NailSalon => "Organization > LocalBusiness > HealthAndBeautyBusiness > NailSalon",
            Self::TattooParlor => "Organization > LocalBusiness > HealthAndBeautyBusiness > TattooParlor",
            Self::HomeAndConstructionBusiness => "Organization > LocalBusiness > HomeAndConstructionBusiness",
            Self::Electrician => "Organization > LocalBusiness > HomeAndConstructionBusiness > Electrician",
            Self::GeneralContractor => "Organization > LocalBusiness > HomeAndConstructionBusiness > GeneralContractor",
            Self::HvacBusiness => "Organization > LocalBusiness > HomeAndConstructionBusiness > HVACBusiness",
            Self::HousePainter => "Organization > LocalBusiness > HomeAndConstructionBusiness > HousePainter",
            Self::Locksmith => "Organization > LocalBusiness > HomeAndConstructionBusiness > Locksmith",
            Self::MovingCompany => "Organization > LocalBusiness > HomeAndConstructionBusiness > MovingCompany",
            Self::Plumber => "Organization > LocalBusiness > HomeAndConstructionBusiness > Plumber",
            Self::RoofingContractor => "Organization > LocalBusiness > HomeAndConstructionBusiness > RoofingContractor",
            Self::InternetCafe => "Organization > LocalBusiness > InternetCafe",
            Self::LegalService => "Organization > LocalBusiness > LegalService",
            Self::Attorney => "Organization > LocalBusiness > LegalService > Attorney",
            Self::Notary => "Organization > LocalBusiness > LegalService > Notary",
            Self::Library => "Organization > LocalBusiness > Library",
            Self::LodgingBusiness => "Organization > LocalBusiness > LodgingBusiness",
            Self::BedAndBreakfast => "Organization > LocalBusiness > LodgingBusiness > BedAndBreakfast",
            Self::Campground => "Organization > LocalBusiness > LodgingBusiness > Campground",
            Self::Hostel => "Organization > LocalBusiness > LodgingBusiness > Hostel",
            Self::Hotel => "Organization > LocalBusiness > LodgingBusiness > Hotel",
            Self::Motel => "Organization > LocalBusiness > LodgingBusiness > Motel",
            Self::Resort => "Organization > LocalBusiness > LodgingBusiness > Resort",
            Self::ProfessionalService => "Organization > LocalBusiness > ProfessionalService",
            Self::RadioStation => "Organization > LocalBusiness > RadioStation",
            Self::RealEstateAgent => "Organization > LocalBusiness > RealEstateAgent",
            Self::RecyclingCenter => "Organization > LocalBusiness > RecyclingCenter",
            Self::SelfStorage => "Organization > LocalBusiness > SelfStorage",
            Self::ShoppingCenter => "Organization > LocalBusiness > ShoppingCenter",
            Self::SportsActivityLocation => "Organization > LocalBusiness > SportsActivityLocation",
            Self::BowlingAlley => "Organization > LocalBusiness > SportsActivityLocation > BowlingAlley",
            Self::ExerciseGym => "Organization > LocalBusiness > SportsActivityLocation > ExerciseGym",
            Self::GolfCourse => "Organization > LocalBusiness > SportsActivityLocation > GolfCourse",
            Self::PublicSwimmingPool => "Organization > LocalBusiness > SportsActivityLocation > PublicSwimmingPool",
            Self::SkiResort => "Organization > LocalBusiness > SportsActivityLocation > SkiResort",
            Self::SportsClub => "Organization > LocalBusiness > SportsActivityLocation > SportsClub",
            Self::StadiumOrArena => "Organization > LocalBusiness > SportsActivityLocation > StadiumOrArena",
            Self::TennisComplex => "Organization > LocalBusiness > SportsActivityLocation > TennisComplex",
            Self::Store => "Organization > LocalBusiness > Store",
            Self::BikeStore => "Organization > LocalBusiness > Store > BikeStore",
            Self::BookStore => "Organization > LocalBusiness > Store > BookStore",
            Self::ClothingStore => "Organization > LocalBusiness > Store > ClothingStore",
            Self::ComputerStore => "Organization > LocalBusiness > Store > ComputerStore",
            Self::ConvenienceStore => "Organization > LocalBusiness > Store > ConvenienceStore",
            Self::DepartmentStore => "Organization > LocalBusiness > Store > DepartmentStore",
            Self::ElectronicsStore => "Organization > LocalBusiness > Store > ElectronicsStore",
            Self::Florist => "Organization > LocalBusiness > Store > Florist",
            Self::FurnitureStore => "Organization > LocalBusiness > Store > FurnitureStore",
            Self::GardenStore => "Organization > LocalBusiness > Store > GardenStore",
            Self::GroceryStore => "Organization > LocalBusiness > Store > GroceryStore",
            Self::HardwareStore => "Organization > LocalBusiness > Store > HardwareStore",
            Self::HobbyShop => "Organization > LocalBusiness > Store > HobbyShop",
            Self::HomeGoodsStore => "Organization > LocalBusiness > Store > HomeGoodsStore",
            Self::JewelryStore => "Organization > LocalBusiness > Store > JewelryStore",
            Self::LiquorStore => "Organization > LocalBusiness > Store > LiquorStore",
            Self::MensClothingStore => "Organization > LocalBusiness > Store > MensClothingStore",
            Self::MobilePhoneStore => "Organization > LocalBusiness > Store > MobilePhoneStore",
            Self::MovieRentalStore => "Organization > LocalBusiness > Store > MovieRentalStore",
            Self::MusicStore => "Organization > LocalBusiness > Store > MusicStore",
            Self::OfficeEquipmentStore => "Organization > LocalBusiness > Store > OfficeEquipmentStore",
            Self::OutletStore => "Organization > LocalBusiness > Store > OutletStore",
            Self::PawnShop => "Organization > LocalBusiness > Store > PawnShop",
            Self::PetStore => "Organization > LocalBusiness > Store > PetStore",
            Self::ShoeStore => "Organization > LocalBusiness > Store > ShoeStore",
            Self::SportingGoodsStore => "Organization > LocalBusiness > Store > SportingGoodsStore",
            Self::TireShop => "Organization > LocalBusiness > Store > TireShop",
            Self::ToyStore => "Organization > LocalBusiness > Store > ToyStore",
            Self::WholesaleStore => "Organization > LocalBusiness > Store > WholesaleStore",
            Self::TelevisionStation => "Organization > LocalBusiness > TelevisionStation",
            Self::TouristInformationCenter => "Organization > LocalBusiness > TouristInformationCenter",
            Self::TravelAgency => "Organization > LocalBusiness > TravelAgency",
            Self::MedicalOrganization => "Organization > MedicalOrganization",
            Self::Pharmacy => "Organization > MedicalOrganization > Pharmacy",
            Self::Physician => "Organization > MedicalOrganization > Physician",
            Self::Ngo => "Organization > NGO",
            Self::PerformingGroup => "Organization > PerformingGroup",
            Self::DanceGroup => "Organization > PerformingGroup > DanceGroup",
            Self::MusicGroup => "Organization > PerformingGroup > MusicGroup",
            Self::TheaterGroup => "Organization > PerformingGroup > TheaterGroup",
            Self::SportsOrganization => "Organization > SportsOrganization",
            Self::SportsTeam => "Organization > SportsOrganization > SportsTeam",
        }
    }
}

impl std::fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrganizationType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| VocabularyError::UnknownOrganizationType(s.to_string()))
    }
}

// ============ Action Vocabulary ============

/// schema.org Action type identifier.
///
/// The closed vocabulary offered for the structured-data action
/// blocks, flattened and sorted alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ActionType {
    AcceptAction,
    AchieveAction,
    ActivateAction,
    AddAction,
    AgreeAction,
    AllocateAction,
    AppendAction,
    ApplyAction,
    ArriveAction,
    AskAction,
    AssessAction,
    AssignAction,
    AuthorizeAction,
    BefriendAction,
    BookmarkAction,
    BorrowAction,
    BuyAction,
    CancelAction,
    CheckAction,
    CheckInAction,
    CheckOutAction,
    ChooseAction,
    CommentAction,
    CommunicateAction,
    ConfirmAction,
    ConsumeAction,
    CookAction,
    CreateAction,
    DeactivateAction,
    DeleteAction,
    DepartAction,
    DisagreeAction,
    DiscoverAction,
    DislikeAction,
    DonateAction,
    DownloadAction,
    DrawAction,
    DrinkAction,
    EatAction,
    EndorseAction,
    ExerciseAction,
    FilmAction,
    FindAction,
    FollowAction,
    GiveAction,
    IgnoreAction,
    InformAction,
    InsertAction,
    InstallAction,
    InteractAction,
    InviteAction,
    JoinAction,
    LeaveAction,
    LendAction,
    LikeAction,
    ListenAction,
    LoseAction,
    MarryAction,
    MoveAction,
    OrderAction,
    OrganizeAction,
    PaintAction,
    PayAction,
    PerformAction,
    PhotographAction,
    PlanAction,
    PlayAction,
    PrependAction,
    QuoteAction,
    ReactAction,
    ReadAction,
    ReceiveAction,
    RegisterAction,
    RejectAction,
    RentAction,
    ReplaceAction,
    ReplyAction,
    ReserveAction,
    ReturnAction,
    ReviewAction,
    RsvpAction,
    ScheduleAction,
    SearchAction,
    SellAction,
    SendAction,
    ShareAction,
    SubscribeAction,
    SuspendAction,
    TakeAction,
    TieAction,
    TipAction,
    TrackAction,
    TradeAction,
    TransferAction,
    TravelAction,
    UnRegisterAction,
    UpdateAction,
    UseAction,
    ViewAction,
    VoteAction,
    WantAction,
    WatchAction,
    WearAction,
    WinAction,
    WriteAction,
}

impl ActionType {
    /// Every vocabulary entry, in form-choice order.
    pub const ALL: &'static [Self] = &[
        Self::AcceptAction,
        Self::AchieveAction,
        Self::ActivateAction,
        Self::AddAction,
        Self::AgreeAction,
        Self::AllocateAction,
        Self::AppendAction,
        Self::ApplyAction,
        Self::ArriveAction,
        Self::AskAction,
        Self::AssessAction,
        Self::AssignAction,
        Self::AuthorizeAction,
        Self::BefriendAction,
        Self::BookmarkAction,
        Self::BorrowAction,
        Self::BuyAction,
        Self::CancelAction,
        Self::CheckAction,
        Self::CheckInAction,
        Self::CheckOutAction,
        Self::ChooseAction,
        Self::CommentAction,
        Self::CommunicateAction,
        Self::ConfirmAction,
        Self::ConsumeAction,
        Self::CookAction,
        Self::CreateAction,
        Self::DeactivateAction,
        Self::DeleteAction,
        Self::DepartAction,
        Self::DisagreeAction,
        Self::DiscoverAction,
        Self::DislikeAction,
        Self::DonateAction,
        Self::DownloadAction,
        Self::DrawAction,
        Self::DrinkAction,
        Self::EatAction,
        Self::EndorseAction,
        Self::ExerciseAction,
        Self::FilmAction,
        Self::FindAction,
        Self::FollowAction,
        Self::GiveAction,
        Self::IgnoreAction,
        Self::InformAction,
        Self::InsertAction,
        Self::InstallAction,
        Self::InteractAction,
        Self::InviteAction,
        Self::JoinAction,
        Self::LeaveAction,
        Self::LendAction,
        Self::LikeAction,
        Self::ListenAction,
        Self::LoseAction,
        Self::MarryAction,
        Self::MoveAction,
        Self::OrderAction,
        Self::OrganizeAction,
        Self::PaintAction,
        Self::PayAction,
        Self::PerformAction,
        Self::PhotographAction,
        Self::PlanAction,
        Self::PlayAction,
        Self::PrependAction,
        Self::QuoteAction,
        Self::ReactAction,
        Self::ReadAction,
        Self::ReceiveAction,
        Self::RegisterAction,
        Self::RejectAction,
        Self::RentAction,
        Self::ReplaceAction,
        Self::ReplyAction,
        Self::ReserveAction,
        Self::ReturnAction,
        Self::ReviewAction,
        Self::RsvpAction,
        Self::ScheduleAction,
        Self::SearchAction,
        Self::SellAction,
        Self::SendAction,
        Self::ShareAction,
        Self::SubscribeAction,
        Self::SuspendAction,
        Self::TakeAction,
        Self::TieAction,
        Self::TipAction,
        Self::TrackAction,
        Self::TradeAction,
        Self::TransferAction,
        Self::TravelAction,
        Self::UnRegisterAction,
        Self::UpdateAction,
        Self::UseAction,
        Self::ViewAction,
        Self::VoteAction,
        Self::WantAction,
        Self::WatchAction,
        Self::WearAction,
        Self::WinAction,
        Self::WriteAction,
    ];

    /// The schema.org spelling of this action type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AcceptAction => "AcceptAction",
            Self::AchieveAction => "AchieveAction",
            Self::ActivateAction => "ActivateAction",
            Self::AddAction => "AddAction",
            Self::AgreeAction => "AgreeAction",
            Self::AllocateAction => "AllocateAction",
            Self::AppendAction => "AppendAction",
            Self::ApplyAction => "ApplyAction",
            Self::ArriveAction => "ArriveAction",
            Self::AskAction => "AskAction",
            Self::AssessAction => "AssessAction",
            Self::AssignAction => "AssignAction",
            Self::AuthorizeAction => "AuthorizeAction",
            Self::BefriendAction => "BefriendAction",
            Self::BookmarkAction => "BookmarkAction",
            Self::BorrowAction => "BorrowAction",
            Self::BuyAction => "BuyAction",
            Self::CancelAction => "CancelAction",
            Self::CheckAction => "CheckAction",
            Self::CheckInAction => "CheckInAction",
            Self::CheckOutAction => "CheckOutAction",
            Self::ChooseAction => "ChooseAction",
            Self::CommentAction => "CommentAction",
            Self::CommunicateAction => "CommunicateAction",
            Self::ConfirmAction => "ConfirmAction",
            Self::ConsumeAction => "ConsumeAction",
            Self::CookAction => "CookAction",
            Self::CreateAction => "CreateAction",
            Self::DeactivateAction => "DeactivateAction",
            Self::DeleteAction => "DeleteAction",
            Self::DepartAction => "DepartAction",
            Self::DisagreeAction => "DisagreeAction",
            Self::DiscoverAction => "DiscoverAction",
            Self::DislikeAction => "DislikeAction",
            Self::DonateAction => "DonateAction",
            Self::DownloadAction => "DownloadAction",
            Self::DrawAction => "DrawAction",
            Self::DrinkAction => "DrinkAction",
            Self::EatAction => "EatAction",
            Self::EndorseAction => "EndorseAction",
            Self::ExerciseAction => "ExerciseAction",
            Self::FilmAction => "FilmAction",
            Self::FindAction => "FindAction",
            Self::FollowAction => "FollowAction",
            Self::GiveAction => "GiveAction",
            Self::IgnoreAction => "IgnoreAction",
            Self::InformAction => "InformAction",
            Self::InsertAction => "InsertAction",
            Self::InstallAction => "InstallAction",
            Self::InteractAction => "InteractAction",
            Self::InviteAction => "InviteAction",
            Self::JoinAction => "JoinAction",
            Self::LeaveAction => "LeaveAction",
            Self::LendAction => "LendAction",
            Self::LikeAction => "LikeAction",
            Self::ListenAction => "ListenAction",
            Self::LoseAction => "LoseAction",
            Self::MarryAction => "MarryAction",
            Self::MoveAction => "MoveAction",
            Self::OrderAction => "OrderAction",
            Self::OrganizeAction => "OrganizeAction",
            Self::PaintAction => "PaintAction",
            Self::PayAction => "PayAction",
            Self::PerformAction => "PerformAction",
            Self::PhotographAction => "PhotographAction",
            Self::PlanAction => "PlanAction",
            Self::PlayAction => "PlayAction",
            Self::PrependAction => "PrependAction",
            Self::QuoteAction => "QuoteAction",
            Self::ReactAction => "ReactAction",
            Self::ReadAction => "ReadAction",
            Self::ReceiveAction => "ReceiveAction",
            Self::RegisterAction => "RegisterAction",
            Self::RejectAction => "RejectAction",
            Self::RentAction => "RentAction",
            Self::ReplaceAction => "ReplaceAction",
            Self::ReplyAction => "ReplyAction",
            Self::ReserveAction => "ReserveAction",
            Self::ReturnAction => "ReturnAction",
            Self::ReviewAction => "ReviewAction",
            Self::RsvpAction => "RsvpAction",
            Self::ScheduleAction => "ScheduleAction",
            Self::SearchAction => "SearchAction",
            Self::SellAction => "SellAction",
            Self::SendAction => "SendAction",
            Self::ShareAction => "ShareAction",
            Self::SubscribeAction => "SubscribeAction",
            Self::SuspendAction => "SuspendAction",
            Self::TakeAction => "TakeAction",
            Self::TieAction => "TieAction",
            Self::TipAction => "TipAction",
            Self::TrackAction => "TrackAction",
            Self::TradeAction => "TradeAction",
            Self::TransferAction => "TransferAction",
            Self::TravelAction => "TravelAction",
            Self::UnRegisterAction => "UnRegisterAction",
            Self::UpdateAction => "UpdateAction",
            Self::UseAction => "UseAction",
            Self::ViewAction => "ViewAction",
            Self::VoteAction => "VoteAction",
            Self::WantAction => "WantAction",
            Self::WatchAction => "WatchAction",
            Self::WearAction => "WearAction",
            Self::WinAction => "WinAction",
            Self::WriteAction => "WriteAction",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActionType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| VocabularyError::UnknownActionType(s.to_string()))
    }
}

// ============ Reservation Vocabulary ============

/// schema.org Reservation type identifier, used as the result type of
/// a structured-data action.
///
/// Left unset for `OrderAction` by documented convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ReservationType {
    Reservation,
    BoatReservation,
    BusReservation,
    EventReservation,
    FlightReservation,
    FoodEstablishmentReservation,
    LodgingReservation,
    RentalCarReservation,
    ReservationPackage,
    TaxiReservation,
    TrainReservation,
}

impl ReservationType {
    /// Every vocabulary entry, in form-choice order.
    pub const ALL: &'static [Self] = &[
        Self::Reservation,
        Self::BoatReservation,
        Self::BusReservation,
        Self::EventReservation,
        Self::FlightReservation,
        Self::FoodEstablishmentReservation,
        Self::LodgingReservation,
        Self::RentalCarReservation,
        Self::ReservationPackage,
        Self::TaxiReservation,
        Self::TrainReservation,
    ];

    /// The schema.org spelling of this reservation type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reservation => "Reservation",
            Self::BoatReservation => "BoatReservation",
            Self::BusReservation => "BusReservation",
            Self::EventReservation => "EventReservation",
            Self::FlightReservation => "FlightReservation",
            Self::FoodEstablishmentReservation => "FoodEstablishmentReservation",
            Self::LodgingReservation => "LodgingReservation",
            Self::RentalCarReservation => "RentalCarReservation",
            Self::ReservationPackage => "ReservationPackage",
            Self::TaxiReservation => "TaxiReservation",
            Self::TrainReservation => "TrainReservation",
        }
    }
}

impl std::fmt::Display for ReservationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReservationType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| VocabularyError::UnknownReservationType(s.to_string()))
    }
}

// ============ Weekday ============

/// Day of the week for open-hours entries.
///
/// The fixed seven-value set; serialized as the full English day name
/// (`"Monday"` .. `"Sunday"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: &'static [Self] = &[
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// The full English day name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Weekday {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|d| d.as_str() == s)
            .copied()
            .ok_or_else(|| VocabularyError::UnknownWeekday(s.to_string()))
    }
}

// ============ Open Graph / Twitter Card ============

/// Open Graph object type for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OpenGraphType {
    /// Article-style content (posts, news).
    Article,
    /// Generic web page. This is the default.
    #[default]
    Website,
}

impl OpenGraphType {
    /// The Open Graph protocol spelling of this type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Website => "website",
        }
    }
}

impl std::fmt::Display for OpenGraphType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OpenGraphType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" => Ok(Self::Article),
            "website" => Ok(Self::Website),
            _ => Err(VocabularyError::UnknownOpenGraphType(s.to_string())),
        }
    }
}

/// Twitter card style for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCardType {
    /// Mobile app card.
    App,
    /// Large-image summary card.
    SummaryLargeImage,
    /// Audio/video player card.
    Player,
    /// Plain summary card. This is the default.
    #[default]
    Summary,
}

impl TwitterCardType {
    /// The Twitter markup spelling of this card style.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::SummaryLargeImage => "summary_large_image",
            Self::Player => "player",
            Self::Summary => "summary",
        }
    }
}

impl std::fmt::Display for TwitterCardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TwitterCardType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "app" => Ok(Self::App),
            "summary_large_image" => Ok(Self::SummaryLargeImage),
            "player" => Ok(Self::Player),
            "summary" => Ok(Self::Summary),
            _ => Err(VocabularyError::UnknownTwitterCardType(s.to_string())),
        }
    }
}
