//! Hand-maintained endpoint replacement data.
//!
//! This is the single place to edit when a new hardcoded path shows up in the
//! frontend: add the literal and its `API_ENDPOINTS` expression here. Pairs
//! are applied in order, and replacement is raw substring substitution, so a
//! key that is a substring of another key would over-match. The trailing
//! quote on every key currently prevents that.

/// The identifier naming the endpoint-constants table. Its presence anywhere
/// in a file is taken as "import already exists".
pub const NAMESPACE_TOKEN: &str = "API_ENDPOINTS";

/// The import statement inserted into files from [`IMPORT_TARGETS`].
pub const IMPORT_LINE: &str = "import { API_ENDPOINTS } from '../config/api';";

/// File extensions eligible for rewriting.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx"];

/// Root directory scanned when none is given on the command line.
pub const DEFAULT_ROOT: &str = "frontend/src";

/// Hardcoded path literal -> `API_ENDPOINTS` expression, in application order.
pub const REPLACEMENTS: &[(&str, &str)] = &[
	// Auth endpoints
	("'/api/auth/me'", "API_ENDPOINTS.AUTH.ME"),
	("'/api/auth/signin'", "API_ENDPOINTS.AUTH.SIGNIN"),
	("'/api/auth/signup'", "API_ENDPOINTS.AUTH.SIGNUP"),
	("'/api/auth/logout'", "API_ENDPOINTS.AUTH.LOGOUT"),
	("'/api/auth/forgot-password'", "API_ENDPOINTS.AUTH.FORGOT_PASSWORD"),
	("'/api/auth/reset-password'", "API_ENDPOINTS.AUTH.RESET_PASSWORD"),
	("'/api/auth/verify-email'", "API_ENDPOINTS.AUTH.VERIFY_EMAIL"),
	(
		"'/api/auth/resend-verification'",
		"API_ENDPOINTS.AUTH.RESEND_VERIFICATION",
	),
	("'/api/auth/force-login'", "API_ENDPOINTS.AUTH.FORCE_LOGIN"),
	// Medicine endpoints
	("'/api/medicine-requests'", "API_ENDPOINTS.MEDICINE_REQUESTS.BASE"),
	(
		"'/api/medicine-requests/my-requests'",
		"API_ENDPOINTS.MEDICINE_REQUESTS.MY_REQUESTS",
	),
	("'/api/medicine-requests/all'", "API_ENDPOINTS.MEDICINE_REQUESTS.ALL"),
	("'/api/medicine-reminders'", "API_ENDPOINTS.MEDICINE_REMINDERS.BASE"),
	(
		"'/api/medicine-reminders/today'",
		"API_ENDPOINTS.MEDICINE_REMINDERS.TODAY",
	),
	// Smart Doctor endpoints
	(
		"'/api/smart-doctor/analyze-symptoms'",
		"API_ENDPOINTS.SMART_DOCTOR.ANALYZE_SYMPTOMS",
	),
	(
		"'/api/smart-doctor/extract-prescription'",
		"API_ENDPOINTS.SMART_DOCTOR.EXTRACT_PRESCRIPTION",
	),
	(
		"'/api/smart-doctor/personalized-profile'",
		"API_ENDPOINTS.SMART_DOCTOR.PERSONALIZED_PROFILE",
	),
	(
		"'/api/smart-doctor/medicine-recommendations'",
		"API_ENDPOINTS.SMART_DOCTOR.MEDICINE_RECOMMENDATIONS",
	),
	// Payment endpoints
	("'/api/payments/create'", "API_ENDPOINTS.PAYMENTS.CREATE"),
	// Cart and orders
	("'/api/cart/count'", "API_ENDPOINTS.CART.COUNT"),
	("'/api/orders/my-orders'", "API_ENDPOINTS.ORDERS.MY_ORDERS"),
	// Support and other endpoints
	("'/api/support/my-tickets'", "API_ENDPOINTS.SUPPORT.MY_TICKETS"),
	("'/api/daily-updates'", "API_ENDPOINTS.DAILY_UPDATES.BASE"),
	("'/api/customer-points/balance'", "API_ENDPOINTS.CUSTOMER_POINTS.BALANCE"),
	(
		"'/api/customer-points/transactions'",
		"API_ENDPOINTS.CUSTOMER_POINTS.TRANSACTIONS",
	),
	(
		"'/api/medical-profile/medical-history'",
		"API_ENDPOINTS.MEDICAL_PROFILE.MEDICAL_HISTORY",
	),
];

/// Parameterized path handled by regex instead of the plain table: the query
/// string has to survive as a string concatenation.
pub const ADHERENCE_PATTERN: &str =
	r"'/api/medicine-reminders/adherence\?period=weekly'";

/// Replacement for [`ADHERENCE_PATTERN`].
pub const ADHERENCE_REPLACEMENT: &str =
	"API_ENDPOINTS.MEDICINE_REMINDERS.ADHERENCE + '?period=weekly'";

/// Files that need the [`IMPORT_LINE`] added before the symbolic references
/// they gain will resolve.
pub const IMPORT_TARGETS: &[&str] = &[
	"MedicineRequestManagement.jsx",
	"MedicineRequestForm.jsx",
	"MedicineReminderManager.jsx",
	"EnhancedSmartDoctorClean.jsx",
	"EnhancedPaymentGateway.jsx",
	"EmailVerification.jsx",
	"EnhancedSmartDoctor.jsx",
	"DailyUpdates.jsx",
	"CustomerPointsPopup.jsx",
	"CustomerDashboard.jsx",
];

/// Whether `file_name` must carry the endpoint import.
pub fn is_import_target(file_name: &str) -> bool {
	IMPORT_TARGETS.contains(&file_name)
}

/// Whether a file with this extension is eligible for rewriting.
pub fn is_source_extension(extension: &str) -> bool {
	SOURCE_EXTENSIONS.contains(&extension)
}
