//! Static English and Arabic string tables.

pub(super) const EN: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.services", "Services"),
    ("nav.providers", "Providers"),
    ("nav.dashboard", "Dashboard"),
    ("nav.bookings", "Bookings"),
    ("nav.chat", "Messages"),
    ("nav.profile", "Profile"),
    ("nav.admin", "Admin"),
    ("nav.notifications", "Notifications"),
    ("nav.login", "Sign In"),
    ("nav.register", "Sign Up"),
    ("nav.logout", "Sign Out"),
    // Common
    ("common.all", "All"),
    ("common.loading", "Loading..."),
    ("common.search", "Search"),
    ("common.save", "Save"),
    ("common.cancel", "Cancel"),
    ("common.edit", "Edit"),
    ("common.delete", "Delete"),
    ("common.view", "View"),
    ("common.approve", "Approve"),
    ("common.reject", "Reject"),
    ("common.pending", "Pending"),
    ("common.at", "at"),
    // Auth
    ("auth.login.title", "Welcome back"),
    ("auth.login.subtitle", "Sign in to your account"),
    ("auth.register.title", "Create your account"),
    ("auth.register.subtitle", "Join our marketplace of trusted providers"),
    ("auth.email", "Email address"),
    ("auth.password", "Password"),
    ("auth.confirm.password", "Confirm password"),
    ("auth.name", "Full name"),
    ("auth.phone", "Phone number"),
    ("auth.role", "Account type"),
    ("auth.role.user", "Customer"),
    ("auth.role.provider", "Service Provider"),
    // Errors
    ("error.invalid.credentials", "Invalid email or password"),
    ("error.passwords.no.match", "Passwords do not match"),
    ("error.password.length", "Password must be at least 6 characters"),
    ("error.registration.failed", "Registration failed. Please try again."),
    ("error.please.sign.in", "Please sign in to continue"),
    ("error.not.found", "The requested item was not found"),
    ("review.rating.range", "Ratings must be between 1 and 5"),
    // Home
    ("home.title", "Find Trusted Service Providers"),
    ("home.subtitle", "Book skilled professionals for every job around your home"),
    ("home.featured.services", "Featured Services"),
    ("home.top.providers", "Top Rated Providers"),
    // Services
    ("services.title", "Our Services"),
    ("services.subtitle", "Browse the services offered on the platform"),
    ("services.all.categories", "All Categories"),
    ("services.no.results", "No services found"),
    // Providers
    ("providers.title", "Service Providers"),
    ("providers.subtitle", "Choose from verified professionals"),
    ("providers.all.services", "All Services"),
    ("providers.all.locations", "All Locations"),
    ("providers.highest.rated", "Highest Rated"),
    ("providers.most.experienced", "Most Experienced"),
    ("providers.most.reviews", "Most Reviews"),
    ("providers.name.az", "Name (A-Z)"),
    ("providers.no.results", "No providers found"),
    ("provider.not.found", "Provider not found"),
    ("provider.years", "years"),
    ("provider.working.hours", "Working Hours"),
    ("provider.closed", "Closed"),
    // Bookings
    ("booking.title", "My Bookings"),
    ("booking.status.pending", "Pending"),
    ("booking.status.confirmed", "Confirmed"),
    ("booking.status.completed", "Completed"),
    ("booking.status.cancelled", "Cancelled"),
    // Reviews
    ("review.cost", "Cost"),
    ("review.speed", "Speed"),
    ("review.punctuality", "Punctuality"),
    // Chat
    ("chat.title", "Messages"),
    ("chat.no.messages", "No messages yet"),
    ("chat.type.message", "Type a message..."),
    // Dashboard
    ("dashboard.welcome", "Welcome back"),
    ("dashboard.user.subtitle", "Manage your bookings and conversations"),
    ("dashboard.provider.subtitle", "Manage your services and customers"),
    ("dashboard.no.upcoming", "No upcoming bookings"),
    // Notifications
    ("notifications.mark.all.read", "Mark all as read"),
    ("notifications.mark.as.read", "Mark as read"),
    ("notifications.no.notifications", "No notifications"),
    // Admin
    ("admin.dashboard", "Admin Dashboard"),
    ("admin.access.denied", "Access Denied"),
    ("admin.no.permission", "You do not have permission to access this page"),
    ("admin.pending.providers", "Pending Providers"),
    ("admin.no.pending", "No pending approvals"),
    ("admin.reports", "Reports"),
    ("admin.no.reports", "No reports"),
    ("admin.start.investigation", "Start Investigation"),
    ("admin.mark.resolved", "Mark Resolved"),
    ("admin.dismiss.report", "Dismiss Report"),
    ("report.status.pending", "Pending"),
    ("report.status.investigating", "Investigating"),
    ("report.status.resolved", "Resolved"),
    ("report.status.dismissed", "Dismissed"),
    ("report.priority.low", "Low"),
    ("report.priority.medium", "Medium"),
    ("report.priority.high", "High"),
];

pub(super) const AR: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "الرئيسية"),
    ("nav.services", "الخدمات"),
    ("nav.providers", "مقدمو الخدمات"),
    ("nav.dashboard", "لوحة التحكم"),
    ("nav.bookings", "الحجوزات"),
    ("nav.chat", "الرسائل"),
    ("nav.profile", "الملف الشخصي"),
    ("nav.admin", "الإدارة"),
    ("nav.notifications", "الإشعارات"),
    ("nav.login", "تسجيل الدخول"),
    ("nav.register", "إنشاء حساب"),
    ("nav.logout", "تسجيل الخروج"),
    // Common
    ("common.all", "الكل"),
    ("common.loading", "جاري التحميل..."),
    ("common.search", "بحث"),
    ("common.save", "حفظ"),
    ("common.cancel", "إلغاء"),
    ("common.edit", "تعديل"),
    ("common.delete", "حذف"),
    ("common.view", "عرض"),
    ("common.approve", "موافقة"),
    ("common.reject", "رفض"),
    ("common.pending", "قيد الانتظار"),
    ("common.at", "في"),
    // Auth
    ("auth.login.title", "مرحبًا بعودتك"),
    ("auth.login.subtitle", "سجل الدخول إلى حسابك"),
    ("auth.register.title", "أنشئ حسابك"),
    ("auth.register.subtitle", "انضم إلى سوق مقدمي الخدمات الموثوقين"),
    ("auth.email", "البريد الإلكتروني"),
    ("auth.password", "كلمة المرور"),
    ("auth.confirm.password", "تأكيد كلمة المرور"),
    ("auth.name", "الاسم الكامل"),
    ("auth.phone", "رقم الهاتف"),
    ("auth.role", "نوع الحساب"),
    ("auth.role.user", "عميل"),
    ("auth.role.provider", "مقدم خدمة"),
    // Errors
    ("error.invalid.credentials", "البريد الإلكتروني أو كلمة المرور غير صحيحة"),
    ("error.passwords.no.match", "كلمتا المرور غير متطابقتين"),
    ("error.password.length", "يجب أن تتكون كلمة المرور من 6 أحرف على الأقل"),
    ("error.registration.failed", "فشل التسجيل. يرجى المحاولة مرة أخرى."),
    ("error.please.sign.in", "يرجى تسجيل الدخول للمتابعة"),
    ("error.not.found", "العنصر المطلوب غير موجود"),
    ("review.rating.range", "يجب أن تكون التقييمات بين 1 و 5"),
    // Home
    ("home.title", "اعثر على مقدمي خدمات موثوقين"),
    ("home.subtitle", "احجز محترفين مهرة لكل عمل في منزلك"),
    ("home.featured.services", "الخدمات المميزة"),
    ("home.top.providers", "الأعلى تقييمًا"),
    // Services
    ("services.title", "خدماتنا"),
    ("services.subtitle", "تصفح الخدمات المتاحة على المنصة"),
    ("services.all.categories", "جميع الفئات"),
    ("services.no.results", "لم يتم العثور على خدمات"),
    // Providers
    ("providers.title", "مقدمو الخدمات"),
    ("providers.subtitle", "اختر من بين محترفين موثقين"),
    ("providers.all.services", "جميع الخدمات"),
    ("providers.all.locations", "جميع المواقع"),
    ("providers.highest.rated", "الأعلى تقييمًا"),
    ("providers.most.experienced", "الأكثر خبرة"),
    ("providers.most.reviews", "الأكثر مراجعات"),
    ("providers.name.az", "الاسم (أ-ي)"),
    ("providers.no.results", "لم يتم العثور على مقدمي خدمات"),
    ("provider.not.found", "مقدم الخدمة غير موجود"),
    ("provider.years", "سنوات"),
    ("provider.working.hours", "ساعات العمل"),
    ("provider.closed", "مغلق"),
    // Bookings
    ("booking.title", "حجوزاتي"),
    ("booking.status.pending", "قيد الانتظار"),
    ("booking.status.confirmed", "مؤكد"),
    ("booking.status.completed", "مكتمل"),
    ("booking.status.cancelled", "ملغى"),
    // Reviews
    ("review.cost", "التكلفة"),
    ("review.speed", "السرعة"),
    ("review.punctuality", "الالتزام بالمواعيد"),
    // Chat
    ("chat.title", "الرسائل"),
    ("chat.no.messages", "لا توجد رسائل بعد"),
    ("chat.type.message", "اكتب رسالة..."),
    // Dashboard
    ("dashboard.welcome", "مرحبًا بعودتك"),
    ("dashboard.user.subtitle", "إدارة حجوزاتك ومحادثاتك"),
    ("dashboard.provider.subtitle", "إدارة خدماتك وعملائك"),
    ("dashboard.no.upcoming", "لا توجد حجوزات قادمة"),
    // Notifications
    ("notifications.mark.all.read", "تحديد الكل كمقروء"),
    ("notifications.mark.as.read", "تحديد كمقروء"),
    ("notifications.no.notifications", "لا توجد إشعارات"),
    // Admin
    ("admin.dashboard", "لوحة الإدارة"),
    ("admin.access.denied", "تم رفض الوصول"),
    ("admin.no.permission", "ليس لديك صلاحية للوصول إلى هذه الصفحة"),
    ("admin.pending.providers", "مقدمو الخدمات المعلقون"),
    ("admin.no.pending", "لا توجد موافقات معلقة"),
    ("admin.reports", "البلاغات"),
    ("admin.no.reports", "لا توجد بلاغات"),
    ("admin.start.investigation", "بدء التحقيق"),
    ("admin.mark.resolved", "تحديد كمحلول"),
    ("admin.dismiss.report", "رفض البلاغ"),
    ("report.status.pending", "قيد الانتظار"),
    ("report.status.investigating", "قيد التحقيق"),
    ("report.status.resolved", "تم الحل"),
    ("report.status.dismissed", "مرفوض"),
    ("report.priority.low", "منخفضة"),
    ("report.priority.medium", "متوسطة"),
    ("report.priority.high", "عالية"),
];
