//! Demo fixtures loaded into a fresh store.

use serde_json::json;

use super::Store;
use crate::models::{
    Booking, BookingStatus, ChatMessage, DaySchedule, Evidence, Localized, Notification, NotificationKind,
    Priority, Rating, Report, ReportCategory, ReportStatus, ReportType, ReportedUserType, Review,
    ReviewRatings, Role, Service, ServiceProvider, User, Weekday, WorkingHours,
};

const AVATAR_BASE: &str = "https://images.pexels.com/photos";

fn avatar(photo: u32) -> Option<String> {
    Some(format!("{AVATAR_BASE}/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=200"))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn areas(items: &[(&str, &str)]) -> Vec<Localized> {
    items.iter().map(|(en, ar)| Localized::new(en, ar)).collect()
}

/// Weekday hours Monday..Friday, then Saturday, then Sunday, each with its own
/// availability flag.
fn hours(weekdays: (&str, &str), friday: (&str, &str, bool), weekend: (&str, &str), sat: bool, sun: bool) -> WorkingHours {
    let mut map = WorkingHours::new();
    for day in [Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday, Weekday::Thursday] {
        map.insert(day, DaySchedule::new(weekdays.0, weekdays.1, true));
    }
    map.insert(Weekday::Friday, DaySchedule::new(friday.0, friday.1, friday.2));
    map.insert(Weekday::Saturday, DaySchedule::new(weekend.0, weekend.1, sat));
    map.insert(Weekday::Sunday, DaySchedule::new(weekend.0, weekend.1, sun));
    map
}

fn rating(overall: f64, cost: f64, speed: f64, punctuality: f64, review_count: u32) -> Rating {
    Rating { overall, cost, speed, punctuality, review_count }
}

// =============================================================================
// USERS & PROVIDERS
// =============================================================================

fn users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            name: "John Doe".into(),
            name_ar: None,
            email: "john@example.com".into(),
            phone: "+1234567890".into(),
            avatar: avatar(220_453),
            role: Role::User,
            is_verified: true,
            created_at: "2024-01-15T08:00:00Z".into(),
            nationality: None,
            nationality_ar: None,
            age: None,
        },
        User {
            id: "2".into(),
            name: "Admin User".into(),
            name_ar: None,
            email: "admin@example.com".into(),
            phone: "+1234567891".into(),
            avatar: avatar(2_379_004),
            role: Role::Admin,
            is_verified: true,
            created_at: "2024-01-01T08:00:00Z".into(),
            nationality: None,
            nationality_ar: None,
            age: None,
        },
    ]
}

struct ProviderSeed<'a> {
    id: &'a str,
    name: (&'a str, &'a str),
    email: &'a str,
    phone: &'a str,
    created_at: &'a str,
    nationality: (&'a str, &'a str),
    age: u32,
    photo: u32,
}

fn provider_user(seed: &ProviderSeed<'_>) -> User {
    User {
        id: seed.id.into(),
        name: seed.name.0.into(),
        name_ar: Some(seed.name.1.into()),
        email: seed.email.into(),
        phone: seed.phone.into(),
        avatar: avatar(seed.photo),
        role: Role::Provider,
        is_verified: true,
        created_at: seed.created_at.into(),
        nationality: Some(seed.nationality.0.into()),
        nationality_ar: Some(seed.nationality.1.into()),
        age: Some(seed.age),
    }
}

#[allow(clippy::too_many_lines)]
fn providers() -> Vec<ServiceProvider> {
    vec![
        ServiceProvider {
            user: provider_user(&ProviderSeed {
                id: "3",
                name: ("Ahmed Al-Rashid", "أحمد الراشد"),
                email: "ahmed@example.com",
                phone: "+966501234567",
                created_at: "2024-01-10T08:00:00Z",
                nationality: ("Saudi", "سعودي"),
                age: 35,
                photo: 1_043_471,
            }),
            services: strings(&["1", "2", "5"]),
            working_area: areas(&[("Riyadh", "الرياض"), ("Al-Khobar", "الخبر")]),
            experience: 8,
            rating: rating(4.8, 4.7, 4.9, 4.8, 156),
            working_hours: hours(("08:00", "17:00"), ("14:00", "18:00", true), ("08:00", "17:00"), true, false),
            unavailable_dates: strings(&["2024-12-25", "2024-12-26"]),
            is_approved: true,
            description: "Professional plumber and electrician with 8 years of experience in residential and commercial services. Specialized in emergency repairs and installations.".into(),
            description_ar: "سباك وكهربائي محترف مع 8 سنوات من الخبرة في الخدمات السكنية والتجارية. متخصص في الإصلاحات الطارئة والتركيبات.".into(),
        },
        ServiceProvider {
            user: provider_user(&ProviderSeed {
                id: "4",
                name: ("Sarah Johnson", "سارة جونسون"),
                email: "sarah@example.com",
                phone: "+1234567892",
                created_at: "2024-01-12T08:00:00Z",
                nationality: ("American", "أمريكية"),
                age: 29,
                photo: 774_909,
            }),
            services: strings(&["6", "7"]),
            working_area: areas(&[("New York", "نيويورك"), ("Brooklyn", "بروكلين")]),
            experience: 5,
            rating: rating(4.6, 4.5, 4.7, 4.6, 89),
            working_hours: hours(("09:00", "16:00"), ("09:00", "16:00", true), ("10:00", "14:00"), true, false),
            unavailable_dates: strings(&["2024-12-31"]),
            is_approved: true,
            description: "Professional cleaning and gardening services with attention to detail and eco-friendly practices.".into(),
            description_ar: "خدمات تنظيف وبستنة احترافية مع الاهتمام بالتفاصيل والممارسات الصديقة للبيئة.".into(),
        },
        ServiceProvider {
            user: provider_user(&ProviderSeed {
                id: "5",
                name: ("Mohammed Hassan", "محمد حسن"),
                email: "mohammed@example.com",
                phone: "+966502345678",
                created_at: "2024-01-08T08:00:00Z",
                nationality: ("Egyptian", "مصري"),
                age: 42,
                photo: 1_222_271,
            }),
            services: strings(&["3", "4"]),
            working_area: areas(&[("Dubai", "دبي"), ("Abu Dhabi", "أبو ظبي")]),
            experience: 12,
            rating: rating(4.9, 4.8, 5.0, 4.9, 203),
            working_hours: hours(("07:00", "19:00"), ("07:00", "19:00", true), ("08:00", "16:00"), true, false),
            unavailable_dates: Vec::new(),
            is_approved: true,
            description: "Reliable water delivery and sewer cleaning services available 24/7 for emergency situations.".into(),
            description_ar: "خدمات توصيل المياه وتنظيف المجاري موثوقة ومتاحة على مدار الساعة للحالات الطارئة.".into(),
        },
        ServiceProvider {
            user: provider_user(&ProviderSeed {
                id: "6",
                name: ("Lisa Chen", "ليزا تشين"),
                email: "lisa@example.com",
                phone: "+1234567893",
                created_at: "2024-01-14T08:00:00Z",
                nationality: ("Chinese", "صينية"),
                age: 31,
                photo: 1_239_291,
            }),
            services: strings(&["8", "6"]),
            working_area: areas(&[("Los Angeles", "لوس أنجلوس"), ("Beverly Hills", "بيفرلي هيلز")]),
            experience: 7,
            rating: rating(4.7, 4.6, 4.8, 4.7, 124),
            working_hours: hours(("08:00", "17:00"), ("08:00", "17:00", true), ("09:00", "15:00"), true, false),
            unavailable_dates: strings(&["2024-12-24", "2024-12-25"]),
            is_approved: true,
            description: "Professional painter and cleaner specializing in residential and commercial properties with premium finishes.".into(),
            description_ar: "رسام ومنظف محترف متخصص في العقارات السكنية والتجارية مع التشطيبات المتميزة.".into(),
        },
        ServiceProvider {
            user: provider_user(&ProviderSeed {
                id: "7",
                name: ("Carlos Rodriguez", "كارلوس رودريغيز"),
                email: "carlos@example.com",
                phone: "+1234567894",
                created_at: "2024-01-16T08:00:00Z",
                nationality: ("Mexican", "مكسيكي"),
                age: 38,
                photo: 1_681_010,
            }),
            services: strings(&["1", "5", "8"]),
            working_area: areas(&[("Miami", "ميامي"), ("Fort Lauderdale", "فورت لودرديل")]),
            experience: 15,
            rating: rating(4.9, 4.9, 4.8, 5.0, 287),
            working_hours: hours(("07:00", "18:00"), ("07:00", "18:00", true), ("08:00", "16:00"), true, false),
            unavailable_dates: Vec::new(),
            is_approved: true,
            description: "Multi-skilled craftsman with 15 years of experience in plumbing, electrical work, and painting. Licensed and insured.".into(),
            description_ar: "حرفي متعدد المهارات مع 15 عامًا من الخبرة في السباكة والأعمال الكهربائية والدهان. مرخص ومؤمن عليه.".into(),
        },
        ServiceProvider {
            user: provider_user(&ProviderSeed {
                id: "8",
                name: ("Fatima Al-Zahra", "فاطمة الزهراء"),
                email: "fatima@example.com",
                phone: "+966503456789",
                created_at: "2024-01-18T08:00:00Z",
                nationality: ("Jordanian", "أردنية"),
                age: 27,
                photo: 1_181_686,
            }),
            services: strings(&["6", "7"]),
            working_area: areas(&[("Amman", "عمان"), ("Zarqa", "الزرقاء")]),
            experience: 4,
            rating: rating(4.5, 4.4, 4.6, 4.5, 67),
            working_hours: hours(("09:00", "16:00"), ("09:00", "16:00", false), ("10:00", "15:00"), true, true),
            unavailable_dates: strings(&["2024-12-30", "2024-12-31"]),
            is_approved: true,
            description: "Dedicated cleaning and gardening professional with a focus on creating beautiful, healthy living spaces.".into(),
            description_ar: "محترفة تنظيف وبستنة مخصصة مع التركيز على إنشاء مساحات معيشة جميلة وصحية.".into(),
        },
    ]
}

// =============================================================================
// CATALOG
// =============================================================================

fn service(id: &str, name: (&str, &str), category: (&str, &str), icon: &str) -> Service {
    Service {
        id: id.into(),
        name: name.0.into(),
        name_ar: name.1.into(),
        category: category.0.into(),
        category_ar: category.1.into(),
        icon: icon.into(),
        is_approved: true,
        requested_by: None,
    }
}

fn services() -> Vec<Service> {
    let maintenance = ("Home Maintenance", "صيانة المنزل");
    let cleaning = ("Cleaning", "التنظيف");
    vec![
        service("1", ("Plumbing", "السباكة"), maintenance, "Wrench"),
        service("2", ("AC Repair", "إصلاح المكيفات"), maintenance, "Wind"),
        service("3", ("Water Delivery", "توصيل المياه"), ("Delivery", "التوصيل"), "Truck"),
        service("4", ("Sewer Cleaning", "تنظيف المجاري"), cleaning, "Droplets"),
        service("5", ("Electrical", "الكهرباء"), maintenance, "Zap"),
        service("6", ("House Cleaning", "تنظيف المنازل"), cleaning, "Sparkles"),
        service("7", ("Gardening", "البستنة"), ("Outdoor", "خارجي"), "Flower"),
        service("8", ("Painting", "الدهان"), ("Home Improvement", "تحسين المنزل"), "Palette"),
    ]
}

// =============================================================================
// ACTIVITY
// =============================================================================

fn messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: "1".into(),
            sender_id: "1".into(),
            receiver_id: "3".into(),
            message: "Hello, I need help with a plumbing issue.".into(),
            timestamp: "2024-01-20T10:30:00Z".into(),
            is_read: true,
            is_reported: None,
        },
        ChatMessage {
            id: "2".into(),
            sender_id: "3".into(),
            receiver_id: "1".into(),
            message: "Hello! I'd be happy to help. What kind of plumbing issue are you facing?".into(),
            timestamp: "2024-01-20T10:35:00Z".into(),
            is_read: true,
            is_reported: None,
        },
    ]
}

fn bookings() -> Vec<Booking> {
    vec![Booking {
        id: "1".into(),
        user_id: "1".into(),
        provider_id: "3".into(),
        service_id: "1".into(),
        date: "2024-01-25".into(),
        time: "10:00".into(),
        status: BookingStatus::Confirmed,
        notes: Some("Kitchen sink is blocked".into()),
        created_at: "2024-01-20T10:00:00Z".into(),
    }]
}

fn reviews() -> Vec<Review> {
    vec![Review {
        id: "1".into(),
        user_id: "1".into(),
        provider_id: "3".into(),
        booking_id: "1".into(),
        ratings: ReviewRatings { cost: 5, speed: 4, punctuality: 5 },
        comment: Some("Excellent service! Very professional and punctual.".into()),
        created_at: "2024-01-25T15:00:00Z".into(),
    }]
}

// =============================================================================
// MODERATION
// =============================================================================

struct ReportSeed<'a> {
    id: &'a str,
    reporter: &'a str,
    reported: &'a str,
    reported_type: ReportedUserType,
    kind: ReportType,
    category: ReportCategory,
    title: (&'a str, &'a str),
    description: (&'a str, &'a str),
    status: ReportStatus,
    priority: Priority,
    evidence: Evidence,
    admin_notes: &'a str,
    resolution: &'a str,
    created_at: &'a str,
    updated_at: &'a str,
}

impl ReportSeed<'_> {
    fn build(self) -> Report {
        let resolved = self.status == ReportStatus::Resolved;
        Report {
            id: self.id.into(),
            reporter_id: self.reporter.into(),
            reported_user_id: self.reported.into(),
            reported_user_type: self.reported_type,
            kind: self.kind,
            category: self.category,
            title: self.title.0.into(),
            title_ar: self.title.1.into(),
            description: self.description.0.into(),
            description_ar: self.description.1.into(),
            status: self.status,
            priority: self.priority,
            evidence: Some(self.evidence),
            admin_notes: self.admin_notes.into(),
            resolution: self.resolution.into(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
            resolved_at: resolved.then(|| self.updated_at.to_owned()),
            resolved_by: resolved.then(|| "2".to_owned()),
        }
    }
}

#[allow(clippy::too_many_lines)]
fn reports() -> Vec<Report> {
    vec![
        ReportSeed {
            id: "report-1",
            reporter: "1",
            reported: "7",
            reported_type: ReportedUserType::Provider,
            kind: ReportType::InappropriateBehavior,
            category: ReportCategory::Conduct,
            title: ("Unprofessional Behavior", "سلوك غير مهني"),
            description: (
                "The provider was rude and unprofessional during our interaction. He used inappropriate language and was disrespectful when I asked questions about the service.",
                "كان مقدم الخدمة وقحًا وغير مهني أثناء تفاعلنا. استخدم لغة غير لائقة وكان غير محترم عندما طرحت أسئلة حول الخدمة.",
            ),
            status: ReportStatus::Pending,
            priority: Priority::High,
            evidence: Evidence {
                screenshots: Some(strings(&["screenshot1.jpg", "screenshot2.jpg"])),
                chat_messages: Some(strings(&["msg-1", "msg-2"])),
                booking_id: Some("1".into()),
                ..Evidence::default()
            },
            admin_notes: "",
            resolution: "",
            created_at: "2024-01-21T11:45:00Z",
            updated_at: "2024-01-21T11:45:00Z",
        }
        .build(),
        ReportSeed {
            id: "report-2",
            reporter: "4",
            reported: "5",
            reported_type: ReportedUserType::Provider,
            kind: ReportType::ServiceQuality,
            category: ReportCategory::Service,
            title: ("Poor Service Quality", "جودة خدمة ضعيفة"),
            description: (
                "The water delivery service was extremely poor. The water containers were dirty and the delivery was 3 hours late without any notification.",
                "كانت خدمة توصيل المياه ضعيفة للغاية. كانت حاويات المياه متسخة والتسليم تأخر 3 ساعات دون أي إشعار.",
            ),
            status: ReportStatus::Investigating,
            priority: Priority::Medium,
            evidence: Evidence {
                photos: Some(strings(&["dirty_container1.jpg", "dirty_container2.jpg"])),
                booking_id: Some("2".into()),
                ..Evidence::default()
            },
            admin_notes: "Contacted provider for explanation. Awaiting response.",
            resolution: "",
            created_at: "2024-01-20T14:30:00Z",
            updated_at: "2024-01-21T09:15:00Z",
        }
        .build(),
        ReportSeed {
            id: "report-3",
            reporter: "6",
            reported: "1",
            reported_type: ReportedUserType::User,
            kind: ReportType::PaymentDispute,
            category: ReportCategory::Payment,
            title: ("Payment Dispute", "نزاع دفع"),
            description: (
                "Customer is refusing to pay for completed painting service. Claims work was not satisfactory despite completion according to agreed specifications.",
                "العميل يرفض الدفع مقابل خدمة الدهان المكتملة. يدعي أن العمل لم يكن مرضيًا رغم الإنجاز وفقًا للمواصفات المتفق عليها.",
            ),
            status: ReportStatus::Resolved,
            priority: Priority::Medium,
            evidence: Evidence {
                photos: Some(strings(&["completed_work1.jpg", "completed_work2.jpg"])),
                contract: Some("painting_contract.pdf".into()),
                booking_id: Some("3".into()),
                ..Evidence::default()
            },
            admin_notes: "Reviewed evidence and contract. Work was completed as agreed.",
            resolution: "Payment was processed through platform guarantee. Customer was educated about service standards.",
            created_at: "2024-01-18T16:20:00Z",
            updated_at: "2024-01-19T10:30:00Z",
        }
        .build(),
        ReportSeed {
            id: "report-4",
            reporter: "3",
            reported: "8",
            reported_type: ReportedUserType::Provider,
            kind: ReportType::SpamFakeReviews,
            category: ReportCategory::PlatformAbuse,
            title: ("Fake Reviews", "مراجعات مزيفة"),
            description: (
                "This provider is posting fake positive reviews on their profile using multiple fake accounts to boost their rating unfairly.",
                "يقوم مقدم الخدمة هذا بنشر مراجعات إيجابية مزيفة على ملفه الشخصي باستخدام حسابات مزيفة متعددة لرفع تقييمه بشكل غير عادل.",
            ),
            status: ReportStatus::Investigating,
            priority: Priority::High,
            evidence: Evidence {
                suspicious_accounts: Some(strings(&["fake-user-1", "fake-user-2", "fake-user-3"])),
                review_ids: Some(strings(&["review-fake-1", "review-fake-2"])),
                ..Evidence::default()
            },
            admin_notes: "Analyzing review patterns and account creation dates. Suspicious activity detected.",
            resolution: "",
            created_at: "2024-01-19T13:15:00Z",
            updated_at: "2024-01-21T08:45:00Z",
        }
        .build(),
        ReportSeed {
            id: "report-5",
            reporter: "1",
            reported: "4",
            reported_type: ReportedUserType::Provider,
            kind: ReportType::SafetyConcern,
            category: ReportCategory::Safety,
            title: ("Safety Violation", "انتهاك السلامة"),
            description: (
                "Provider did not follow basic safety protocols during house cleaning. Used harsh chemicals without proper ventilation and did not wear protective equipment.",
                "لم يتبع مقدم الخدمة بروتوكولات السلامة الأساسية أثناء تنظيف المنزل. استخدم مواد كيميائية قاسية دون تهوية مناسبة ولم يرتد معدات الحماية.",
            ),
            status: ReportStatus::Resolved,
            priority: Priority::High,
            evidence: Evidence {
                photos: Some(strings(&["safety_violation1.jpg"])),
                witness_statement: Some("witness_statement.pdf".into()),
                ..Evidence::default()
            },
            admin_notes: "Provider was contacted and provided safety training. Warning issued.",
            resolution: "Provider completed mandatory safety training course. Profile updated with safety certification requirement.",
            created_at: "2024-01-17T09:30:00Z",
            updated_at: "2024-01-18T14:20:00Z",
        }
        .build(),
        ReportSeed {
            id: "report-6",
            reporter: "5",
            reported: "6",
            reported_type: ReportedUserType::Provider,
            kind: ReportType::PricingFraud,
            category: ReportCategory::Fraud,
            title: ("Price Manipulation", "تلاعب في الأسعار"),
            description: (
                "Provider is charging different prices to different customers for the same service without justification. Discriminatory pricing practices.",
                "يفرض مقدم الخدمة أسعارًا مختلفة على عملاء مختلفين لنفس الخدمة دون مبرر. ممارسات تسعير تمييزية.",
            ),
            status: ReportStatus::Pending,
            priority: Priority::Medium,
            evidence: Evidence {
                price_comparisons: Some(strings(&["price_evidence1.pdf", "price_evidence2.pdf"])),
                customer_testimonies: Some(strings(&["testimony1.pdf", "testimony2.pdf"])),
                ..Evidence::default()
            },
            admin_notes: "",
            resolution: "",
            created_at: "2024-01-21T15:45:00Z",
            updated_at: "2024-01-21T15:45:00Z",
        }
        .build(),
    ]
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

struct NotificationSeed<'a> {
    id: &'a str,
    user: &'a str,
    kind: NotificationKind,
    title: (&'a str, &'a str),
    message: (&'a str, &'a str),
    is_read: bool,
    created_at: &'a str,
    data: serde_json::Value,
}

impl NotificationSeed<'_> {
    fn build(self) -> Notification {
        Notification {
            id: self.id.into(),
            user_id: self.user.into(),
            kind: self.kind,
            title: self.title.0.into(),
            title_ar: self.title.1.into(),
            message: self.message.0.into(),
            message_ar: self.message.1.into(),
            is_read: self.is_read,
            created_at: self.created_at.into(),
            data: Some(self.data),
        }
    }
}

#[allow(clippy::too_many_lines)]
fn notifications() -> Vec<Notification> {
    let seeds = [
        NotificationSeed {
            id: "1",
            user: "1",
            kind: NotificationKind::Message,
            title: ("New Message", "رسالة جديدة"),
            message: (
                "You have a new message from Ahmed Al-Rashid about your plumbing service request",
                "لديك رسالة جديدة من أحمد الراشد حول طلب خدمة السباكة الخاص بك",
            ),
            is_read: false,
            created_at: "2024-01-20T14:30:00Z",
            data: json!({ "providerId": "3", "chatRoomId": "1-3" }),
        },
        NotificationSeed {
            id: "2",
            user: "1",
            kind: NotificationKind::Booking,
            title: ("Booking Confirmed", "تم تأكيد الحجز"),
            message: (
                "Your plumbing service booking with Ahmed Al-Rashid has been confirmed for January 25th at 10:00 AM",
                "تم تأكيد حجز خدمة السباكة الخاصة بك مع أحمد الراشد لتاريخ 25 يناير في الساعة 10:00 صباحًا",
            ),
            is_read: false,
            created_at: "2024-01-20T12:15:00Z",
            data: json!({ "bookingId": "1", "providerId": "3" }),
        },
        NotificationSeed {
            id: "3",
            user: "3",
            kind: NotificationKind::Review,
            title: ("New Review Received", "تم استلام مراجعة جديدة"),
            message: (
                "John Doe left you a 5-star review for your plumbing service. Great job!",
                "ترك لك جون دو مراجعة 5 نجوم لخدمة السباكة الخاصة بك. عمل رائع!",
            ),
            is_read: true,
            created_at: "2024-01-19T16:45:00Z",
            data: json!({ "reviewId": "1", "userId": "1" }),
        },
        NotificationSeed {
            id: "4",
            user: "4",
            kind: NotificationKind::Approval,
            title: ("Profile Approved", "تمت الموافقة على الملف الشخصي"),
            message: (
                "Congratulations! Your service provider profile has been approved and is now live",
                "تهانينا! تمت الموافقة على ملف مقدم الخدمة الخاص بك وهو الآن متاح",
            ),
            is_read: true,
            created_at: "2024-01-18T09:20:00Z",
            data: json!({ "profileId": "4" }),
        },
        NotificationSeed {
            id: "5",
            user: "1",
            kind: NotificationKind::Booking,
            title: ("Service Completed", "تم إكمال الخدمة"),
            message: (
                "Your plumbing service has been marked as completed. Please leave a review for Ahmed Al-Rashid",
                "تم تحديد خدمة السباكة الخاصة بك كمكتملة. يرجى ترك مراجعة لأحمد الراشد",
            ),
            is_read: true,
            created_at: "2024-01-17T11:30:00Z",
            data: json!({ "bookingId": "1", "providerId": "3" }),
        },
        NotificationSeed {
            id: "6",
            user: "3",
            kind: NotificationKind::Booking,
            title: ("New Booking Request", "طلب حجز جديد"),
            message: (
                "You have a new booking request from Sarah Johnson for house cleaning service",
                "لديك طلب حجز جديد من سارة جونسون لخدمة تنظيف المنزل",
            ),
            is_read: false,
            created_at: "2024-01-21T09:15:00Z",
            data: json!({ "bookingId": "2", "userId": "4" }),
        },
        NotificationSeed {
            id: "7",
            user: "1",
            kind: NotificationKind::Message,
            title: ("Provider Response", "رد مقدم الخدمة"),
            message: (
                "Mohammed Hassan responded to your water delivery inquiry",
                "رد محمد حسن على استفسارك حول توصيل المياه",
            ),
            is_read: false,
            created_at: "2024-01-21T08:45:00Z",
            data: json!({ "providerId": "5", "chatRoomId": "1-5" }),
        },
        NotificationSeed {
            id: "8",
            user: "2",
            kind: NotificationKind::Approval,
            title: ("New Provider Registration", "تسجيل مقدم خدمة جديد"),
            message: (
                "A new service provider \"Michael Thompson\" has registered and is pending approval. Please review their profile and documentation.",
                "قام مقدم خدمة جديد \"مايكل تومسون\" بالتسجيل وهو في انتظار الموافقة. يرجى مراجعة ملفه الشخصي والوثائق.",
            ),
            is_read: false,
            created_at: "2024-01-21T15:30:00Z",
            data: json!({ "providerId": "pending-1", "action": "review_provider" }),
        },
        NotificationSeed {
            id: "9",
            user: "2",
            kind: NotificationKind::Approval,
            title: ("Service Request Submitted", "تم تقديم طلب خدمة"),
            message: (
                "A new service \"Pool Maintenance\" has been requested by provider Lisa Chen. Review and approve if appropriate.",
                "تم طلب خدمة جديدة \"صيانة المسابح\" من قبل مقدم الخدمة ليزا تشين. راجع ووافق إذا كان مناسباً.",
            ),
            is_read: false,
            created_at: "2024-01-21T14:20:00Z",
            data: json!({ "serviceId": "pending-service-1", "providerId": "6", "action": "review_service" }),
        },
        NotificationSeed {
            id: "10",
            user: "2",
            kind: NotificationKind::Message,
            title: ("System Alert", "تنبيه النظام"),
            message: (
                "High volume of user registrations detected today (47 new users). System performance is optimal.",
                "تم اكتشاف حجم كبير من تسجيلات المستخدمين اليوم (47 مستخدم جديد). أداء النظام مثالي.",
            ),
            is_read: true,
            created_at: "2024-01-21T13:00:00Z",
            data: json!({ "type": "system_alert", "metric": "user_registrations", "count": 47 }),
        },
        NotificationSeed {
            id: "11",
            user: "2",
            kind: NotificationKind::Review,
            title: ("Reported Content", "محتوى مبلغ عنه"),
            message: (
                "A user has reported inappropriate behavior from provider \"Carlos Rodriguez\". Please investigate and take appropriate action.",
                "أبلغ مستخدم عن سلوك غير لائق من مقدم الخدمة \"كارلوس رودريغيز\". يرجى التحقيق واتخاذ الإجراء المناسب.",
            ),
            is_read: false,
            created_at: "2024-01-21T11:45:00Z",
            data: json!({ "providerId": "7", "reportId": "report-1", "reportType": "behavior", "action": "investigate" }),
        },
        NotificationSeed {
            id: "12",
            user: "2",
            kind: NotificationKind::Booking,
            title: ("Payment Issue Alert", "تنبيه مشكلة دفع"),
            message: (
                "Multiple payment failures detected for booking #1234. Customer support intervention may be required.",
                "تم اكتشاف فشل متعدد في الدفع للحجز #1234. قد تكون هناك حاجة لتدخل دعم العملاء.",
            ),
            is_read: false,
            created_at: "2024-01-21T10:30:00Z",
            data: json!({ "bookingId": "1234", "userId": "1", "issue": "payment_failure", "action": "support_needed" }),
        },
        NotificationSeed {
            id: "13",
            user: "2",
            kind: NotificationKind::Approval,
            title: ("Provider Verification Required", "مطلوب التحقق من مقدم الخدمة"),
            message: (
                "Provider \"Ahmed Al-Rashid\" has uploaded new certification documents. Please verify and update their profile status.",
                "قام مقدم الخدمة \"أحمد الراشد\" بتحميل وثائق شهادة جديدة. يرجى التحقق وتحديث حالة ملفه الشخصي.",
            ),
            is_read: true,
            created_at: "2024-01-20T16:20:00Z",
            data: json!({ "providerId": "3", "documentType": "certification", "action": "verify_documents" }),
        },
        NotificationSeed {
            id: "14",
            user: "2",
            kind: NotificationKind::Message,
            title: ("Weekly Report Ready", "التقرير الأسبوعي جاهز"),
            message: (
                "Your weekly platform analytics report is ready for review. 156 new bookings, 23 new providers, 4.7 average rating.",
                "تقرير تحليلات المنصة الأسبوعي جاهز للمراجعة. 156 حجز جديد، 23 مقدم خدمة جديد، متوسط تقييم 4.7.",
            ),
            is_read: true,
            created_at: "2024-01-20T09:00:00Z",
            data: json!({ "reportType": "weekly", "bookings": 156, "providers": 23, "avgRating": 4.7, "action": "view_report" }),
        },
        NotificationSeed {
            id: "15",
            user: "2",
            kind: NotificationKind::Approval,
            title: ("Bulk Service Update", "تحديث الخدمات بالجملة"),
            message: (
                "Provider \"Mohammed Hassan\" has requested to add 3 new services to their profile. Bulk approval may be efficient.",
                "طلب مقدم الخدمة \"محمد حسن\" إضافة 3 خدمات جديدة إلى ملفه الشخصي. قد تكون الموافقة بالجملة فعالة.",
            ),
            is_read: false,
            created_at: "2024-01-19T14:15:00Z",
            data: json!({
                "providerId": "5",
                "serviceCount": 3,
                "services": ["pool-cleaning", "carpet-cleaning", "window-cleaning"],
                "action": "bulk_approve"
            }),
        },
    ];
    seeds.into_iter().map(NotificationSeed::build).collect()
}

/// Fixture store: two users, six approved providers, eight services and the
/// sample activity that goes with them.
#[must_use]
pub fn fixtures() -> Store {
    Store {
        users: users(),
        providers: providers(),
        services: services(),
        messages: messages(),
        bookings: bookings(),
        reviews: reviews(),
        reports: reports(),
        notifications: notifications(),
    }
}
