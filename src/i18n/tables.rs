//! Translation tables for every supported locale.
//!
//! English is the canonical table. The other locales may be partial; missing
//! entries resolve through the English fallback.

use super::MessageKey as K;

pub(super) const ENGLISH: &[(K, &str)] = &[
    // Login & Auth
    (K::AuthWelcome, "Welcome Back"),
    (K::AuthCreateAccount, "Create Account"),
    (K::AuthSignInDescription, "Sign in to access municipal services"),
    (K::AuthSignUpDescription, "Sign up for municipal services"),
    (K::AuthCitizen, "Citizen"),
    (K::AuthStaff, "Staff"),
    (K::AuthMobile, "Mobile Number"),
    (K::AuthMobilePlaceholder, "Enter 10-digit mobile number"),
    (K::AuthFullName, "Full Name"),
    (K::AuthFullNamePlaceholder, "Enter your full name"),
    (K::AuthEmail, "Email Address"),
    (K::AuthEmailPlaceholder, "Enter your email address"),
    (K::AuthEmployeeId, "Employee ID"),
    (K::AuthEmployeeIdPlaceholder, "Enter employee ID"),
    (K::AuthPassword, "Password"),
    (K::AuthPasswordPlaceholder, "Enter password"),
    (K::AuthSignInCitizen, "Sign In as Citizen"),
    (K::AuthSignInStaff, "Sign In as Staff"),
    (K::AuthCreateCitizenAccount, "Create Citizen Account"),
    (K::AuthSigningIn, "Signing In..."),
    (K::AuthCreatingAccount, "Creating Account..."),
    (K::AuthAlreadyAccount, "Already have an account? Sign in"),
    (K::AuthNewUser, "New user? Create an account"),
    (K::AuthStaffAdminOnly, "Staff accounts are created by administrators only"),
    (K::AuthSecureAccess, "Secure access to municipal services • Government of India"),
    // Header
    (K::HeaderMunicipalPortal, "Municipal Portal"),
    (K::HeaderGrievanceSystem, "Grievance Redressal System"),
    // Location
    (K::LocationSelectLocation, "Select Your Location"),
    (K::LocationSelectDescription, "Choose your state and district for location-aware services"),
    (K::LocationState, "State"),
    (K::LocationDistrict, "District"),
    (K::LocationSelectState, "Select state"),
    (K::LocationSelectDistrict, "Select district"),
    (K::LocationContinue, "Continue"),
    // Departments
    (K::DepartmentsTitle, "Select Department"),
    (K::DepartmentsDescription, "Choose the relevant department for your grievance"),
    (K::DepartmentsSelectDepartment, "Select Department"),
    (K::DepartmentsPending, "pending"),
    (K::DepartmentsElectricity, "Electricity"),
    (K::DepartmentsElectricityDesc, "Street lights, power outages, damaged poles and electrical infrastructure issues"),
    (K::DepartmentsWaterSupply, "Water Supply"),
    (K::DepartmentsWaterSupplyDesc, "Pipe leakages, contaminated water, reduced water supply and related issues"),
    (K::DepartmentsRoadsTransport, "Roads & Transport"),
    (K::DepartmentsRoadsTransportDesc, "Potholes, unfinished road works, road destructions and transport issues"),
    (K::DepartmentsHealthSanitation, "Health & Sanitation"),
    (K::DepartmentsHealthSanitationDesc, "Garbage collection, hygiene issues, unswept streets and sanitation problems"),
    (K::DepartmentsSewageDrainage, "Sewage & Drainage"),
    (K::DepartmentsSewageDrainageDesc, "Blocked drains, sewage leaks, mosquito breeding and drainage issues"),
    // Complaint Form
    (K::ComplaintSubmitComplaint, "Submit Complaint"),
    (K::ComplaintSubmitDescription, "Submit your grievance to {department} department"),
    (K::ComplaintTitle, "Complaint Title"),
    (K::ComplaintTitlePlaceholder, "Brief title describing your issue"),
    (K::ComplaintDescription, "Detailed Description"),
    (K::ComplaintDescriptionPlaceholder, "Describe your issue in detail..."),
    (K::ComplaintLocation, "Specific Location (Optional)"),
    (K::ComplaintLocationPlaceholder, "Street address, landmark, area details"),
    (K::ComplaintAttachments, "Attachments (Optional)"),
    (K::ComplaintUploadText, "Click to upload images, videos, or documents"),
    (K::ComplaintSupportedFiles, "Supported: JPG, PNG, MP4, PDF, DOC (Max 10MB each)"),
    (K::ComplaintAttachedFiles, "Attached Files:"),
    (K::ComplaintRemove, "Remove"),
    (K::ComplaintSubmitting, "Submitting..."),
    (K::ComplaintSubmit, "Submit Complaint"),
    (K::ComplaintBackToDepartments, "← Back to Departments"),
    (K::ComplaintRequired, "*"),
    (K::ComplaintCharacters, "characters"),
    (K::ComplaintRequiredDetail, "Title and description are required"),
    (K::ComplaintUnsupportedAttachment, "Unsupported file type: {name}"),
    // Staff Dashboard
    (K::StaffDashboard, "Staff Dashboard"),
    (K::StaffWelcomeBack, "Welcome back, {name} • {department} Department"),
    (K::StaffTotalAssigned, "Total Assigned"),
    (K::StaffPending, "Pending"),
    (K::StaffInProgress, "In Progress"),
    (K::StaffResolvedToday, "Resolved Today"),
    (K::StaffAssignedComplaints, "Assigned Complaints"),
    (K::StaffManageDescription, "Manage and respond to citizen grievances"),
    (K::StaffTicketId, "Ticket ID:"),
    (K::StaffCitizen, "Citizen:"),
    (K::StaffLocation, "Location:"),
    (K::StaffAssigned, "Assigned:"),
    (K::StaffView, "View"),
    (K::StaffChat, "Chat"),
    (K::StaffHigh, "high"),
    (K::StaffMedium, "medium"),
    (K::StaffLow, "low"),
    // Common
    (K::CommonLocation, "Location:"),
    (K::CommonFillRequired, "Please fill required fields"),
    (K::CommonFillAll, "Please fill all fields"),
    (K::CommonSuccess, "Success"),
    (K::CommonError, "Error"),
    (K::CommonComplaintSubmitted, "Complaint Submitted Successfully"),
    (K::CommonTicketId, "Your ticket ID is {ticketId}"),
];

pub(super) const HINDI: &[(K, &str)] = &[
    // Login & Auth
    (K::AuthWelcome, "स्वागत है"),
    (K::AuthCreateAccount, "खाता बनाएं"),
    (K::AuthSignInDescription, "नगरीय सेवाओं तक पहुंचने के लिए साइन इन करें"),
    (K::AuthSignUpDescription, "नगरीय सेवाओं के लिए साइन अप करें"),
    (K::AuthCitizen, "नागरिक"),
    (K::AuthStaff, "कर्मचारी"),
    (K::AuthMobile, "मोबाइल नंबर"),
    (K::AuthMobilePlaceholder, "10 अंकों का मोबाइल नंबर दर्ज करें"),
    (K::AuthFullName, "पूरा नाम"),
    (K::AuthFullNamePlaceholder, "अपना पूरा नाम दर्ज करें"),
    (K::AuthEmail, "ईमेल पता"),
    (K::AuthEmailPlaceholder, "अपना ईमेल पता दर्ज करें"),
    (K::AuthEmployeeId, "कर्मचारी आईडी"),
    (K::AuthEmployeeIdPlaceholder, "कर्मचारी आईडी दर्ज करें"),
    (K::AuthPassword, "पासवर्ड"),
    (K::AuthPasswordPlaceholder, "पासवर्ड दर्ज करें"),
    (K::AuthSignInCitizen, "नागरिक के रूप में साइन इन करें"),
    (K::AuthSignInStaff, "कर्मचारी के रूप में साइन इन करें"),
    (K::AuthCreateCitizenAccount, "नागरिक खाता बनाएं"),
    (K::AuthSigningIn, "साइन इन हो रहे हैं..."),
    (K::AuthCreatingAccount, "खाता बनाया जा रहा है..."),
    (K::AuthAlreadyAccount, "पहले से खाता है? साइन इन करें"),
    (K::AuthNewUser, "नए उपयोगकर्ता? खाता बनाएं"),
    (K::AuthStaffAdminOnly, "कर्मचारी खाते केवल प्रशासकों द्वारा बनाए जाते हैं"),
    (K::AuthSecureAccess, "नगरीय सेवाओं तक सुरक्षित पहुंच • भारत सरकार"),
    // Header
    (K::HeaderMunicipalPortal, "नगरीय पोर्टल"),
    (K::HeaderGrievanceSystem, "शिकायत निवारण प्रणाली"),
    // Location
    (K::LocationSelectLocation, "अपना स्थान चुनें"),
    (K::LocationSelectDescription, "स्थान-आधारित सेवाओं के लिए अपना राज्य और जिला चुनें"),
    (K::LocationState, "राज्य"),
    (K::LocationDistrict, "जिला"),
    (K::LocationSelectState, "राज्य चुनें"),
    (K::LocationSelectDistrict, "जिला चुनें"),
    (K::LocationContinue, "जारी रखें"),
    // Departments
    (K::DepartmentsTitle, "विभाग चुनें"),
    (K::DepartmentsDescription, "अपनी शिकायत के लिए संबंधित विभाग चुनें"),
    (K::DepartmentsSelectDepartment, "विभाग चुनें"),
    (K::DepartmentsPending, "लंबित"),
    (K::DepartmentsElectricity, "बिजली"),
    (K::DepartmentsElectricityDesc, "स्ट्रीट लाइट, बिजली कटौती, क्षतिग्रस्त खंभे और विद्युत अवसंरचना की समस्याएं"),
    (K::DepartmentsWaterSupply, "जल आपूर्ति"),
    (K::DepartmentsWaterSupplyDesc, "पाइप रिसाव, दूषित पानी, कम जल आपूर्ति और संबंधित समस्याएं"),
    (K::DepartmentsRoadsTransport, "सड़क और परिवहन"),
    (K::DepartmentsRoadsTransportDesc, "गड्ढे, अधूरे सड़क कार्य, सड़क क्षति और परिवहन की समस्याएं"),
    (K::DepartmentsHealthSanitation, "स्वास्थ्य और स्वच्छता"),
    (K::DepartmentsHealthSanitationDesc, "कचरा संग्रह, स्वच्छता मुद्दे, अस्वच्छ सड़कें और स्वच्छता की समस्याएं"),
    (K::DepartmentsSewageDrainage, "सीवेज और जल निकासी"),
    (K::DepartmentsSewageDrainageDesc, "अवरुद्ध नालियां, सीवेज रिसाव, मच्छर प्रजनन और जल निकासी की समस्याएं"),
    // Complaint Form
    (K::ComplaintSubmitComplaint, "शिकायत दर्ज करें"),
    (K::ComplaintSubmitDescription, "{department} विभाग को अपनी शिकायत दर्ज करें"),
    (K::ComplaintTitle, "शिकायत का शीर्षक"),
    (K::ComplaintTitlePlaceholder, "अपनी समस्या का संक्षिप्त शीर्षक"),
    (K::ComplaintDescription, "विस्तृत विवरण"),
    (K::ComplaintDescriptionPlaceholder, "अपनी समस्या का विस्तार से वर्णन करें..."),
    (K::ComplaintLocation, "विशिष्ट स्थान (वैकल्पिक)"),
    (K::ComplaintLocationPlaceholder, "सड़क का पता, मील का पत्थर, क्षेत्र का विवरण"),
    (K::ComplaintAttachments, "अटैचमेंट (वैकल्पिक)"),
    (K::ComplaintUploadText, "चित्र, वीडियो या दस्तावेज़ अपलोड करने के लिए क्लिक करें"),
    (K::ComplaintSupportedFiles, "समर्थित: JPG, PNG, MP4, PDF, DOC (अधिकतम 10MB प्रत्येक)"),
    (K::ComplaintAttachedFiles, "संलग्न फाइलें:"),
    (K::ComplaintRemove, "हटाएं"),
    (K::ComplaintSubmitting, "जमा किया जा रहा है..."),
    (K::ComplaintSubmit, "शिकायत दर्ज करें"),
    (K::ComplaintBackToDepartments, "← विभागों में वापस"),
    (K::ComplaintRequired, "*"),
    (K::ComplaintCharacters, "अक्षर"),
    (K::ComplaintRequiredDetail, "शीर्षक और विवरण आवश्यक हैं"),
    // Staff Dashboard
    (K::StaffDashboard, "कर्मचारी डैशबोर्ड"),
    (K::StaffWelcomeBack, "स्वागत है, {name} • {department} विभाग"),
    (K::StaffTotalAssigned, "कुल आवंटित"),
    (K::StaffPending, "लंबित"),
    (K::StaffInProgress, "प्रगति में"),
    (K::StaffResolvedToday, "आज हल किए गए"),
    (K::StaffAssignedComplaints, "आवंटित शिकायतें"),
    (K::StaffManageDescription, "नागरिक शिकायतों का प्रबंधन और जवाब दें"),
    (K::StaffTicketId, "टिकट आईडी:"),
    (K::StaffCitizen, "नागरिक:"),
    (K::StaffLocation, "स्थान:"),
    (K::StaffAssigned, "आवंटित:"),
    (K::StaffView, "देखें"),
    (K::StaffChat, "चैट"),
    (K::StaffHigh, "उच्च"),
    (K::StaffMedium, "मध्यम"),
    (K::StaffLow, "कम"),
    // Common
    (K::CommonLocation, "स्थान:"),
    (K::CommonFillRequired, "कृपया आवश्यक फ़ील्ड भरें"),
    (K::CommonFillAll, "कृपया सभी फ़ील्ड भरें"),
    (K::CommonSuccess, "सफलता"),
    (K::CommonError, "त्रुटि"),
    (K::CommonComplaintSubmitted, "शिकायत सफलतापूर्वक दर्ज की गई"),
    (K::CommonTicketId, "आपका टिकट आईडी है {ticketId}"),
];

pub(super) const TAMIL: &[(K, &str)] = &[
    // Login & Auth
    (K::AuthWelcome, "வரவேற்கிறோம்"),
    (K::AuthCreateAccount, "கணக்கு உருவாக்கவும்"),
    (K::AuthSignInDescription, "நகராட்சி சேவைகளை அணுக உள்நுழையவும்"),
    (K::AuthSignUpDescription, "நகராட்சி சேவைகளுக்கு பதிவுசெய்யவும்"),
    (K::AuthCitizen, "குடிமகன்"),
    (K::AuthStaff, "ஊழியர்"),
    (K::AuthMobile, "மொபைல் எண்"),
    (K::AuthMobilePlaceholder, "10 இலக்க மொபைல் எண்ணை உள்ளிடவும்"),
    (K::AuthFullName, "முழு பெயர்"),
    (K::AuthFullNamePlaceholder, "உங்கள் முழு பெயரை உள்ளிடவும்"),
    (K::AuthEmail, "மின்னஞ்சல் முகவரி"),
    (K::AuthEmailPlaceholder, "உங்கள் மின்னஞ்சல் முகவரியை உள்ளிடவும்"),
    (K::AuthEmployeeId, "ஊழியர் அடையாள எண்"),
    (K::AuthEmployeeIdPlaceholder, "ஊழியர் அடையாள எண்ணை உள்ளிடவும்"),
    (K::AuthPassword, "கடவுச்சொல்"),
    (K::AuthPasswordPlaceholder, "கடவுச்சொல்லை உள்ளிடவும்"),
    (K::AuthSignInCitizen, "குடிமகனாக உள்நுழையவும்"),
    (K::AuthSignInStaff, "ஊழியராக உள்நுழையவும்"),
    (K::AuthCreateCitizenAccount, "குடிமகன் கணக்கை உருவாக்கவும்"),
    (K::AuthSigningIn, "உள்நுழைகிறது..."),
    (K::AuthCreatingAccount, "கணக்கு உருவாக்கப்படுகிறது..."),
    (K::AuthAlreadyAccount, "ஏற்கனவே கணக்கு உள்ளதா? உள்நுழையவும்"),
    (K::AuthNewUser, "புதிய பயனர்? கணக்கு உருவாக்கவும்"),
    (K::AuthStaffAdminOnly, "ஊழியர் கணக்குகள் நிர்வாகிகளால் மட்டுமே உருவாக்கப்படும்"),
    (K::AuthSecureAccess, "நகராட்சி சேவைகளுக்கு பாதுகாப்பான அணுகல் • இந்திய அரசு"),
    // Header
    (K::HeaderMunicipalPortal, "நகராட்சி போர்ட்டல்"),
    (K::HeaderGrievanceSystem, "குறைதீர்ப்பு அமைப்பு"),
    // Location
    (K::LocationSelectLocation, "உங்கள் இடத்தைத் தேர்ந்தெடுக்கவும்"),
    (K::LocationSelectDescription, "இட-அடிப்படையிலான சேவைகளுக்கு உங்கள் மாநிலம் மற்றும் மாவட்டத்தைத் தேர்ந்தெடுக்கவும்"),
    (K::LocationState, "மாநிலம்"),
    (K::LocationDistrict, "மாவட்டம்"),
    (K::LocationSelectState, "மாநிலத்தைத் தேர்ந்தெடுக்கவும்"),
    (K::LocationSelectDistrict, "மாவட்டத்தைத் தேர்ந்தெடுக்கவும்"),
    (K::LocationContinue, "தொடரவும்"),
    // Departments
    (K::DepartmentsTitle, "துறையைத் தேர்ந்தெடுக்கவும்"),
    (K::DepartmentsDescription, "உங்கள் குறைக்கு தொடர்புடைய துறையைத் தேர்ந்தெடுக்கவும்"),
    (K::DepartmentsSelectDepartment, "துறையைத் தேர்ந்தெடுக்கவும்"),
    (K::DepartmentsPending, "நிலுவையில்"),
    (K::DepartmentsElectricity, "மின்சாரம்"),
    (K::DepartmentsElectricityDesc, "தெரு விளக்குகள், மின்சார துண்டிப்பு, சேதமடைந்த கம்பங்கள் மற்றும் மின்சார கட்டமைப்பு பிரச்சினைகள்"),
    (K::DepartmentsWaterSupply, "நீர் வழங்கல்"),
    (K::DepartmentsWaterSupplyDesc, "குழாய் கசிவுகள், அசுத்த நீர், குறைந்த நீர் வழங்கல் மற்றும் தொடர்புடைய பிரச்சினைகள்"),
    (K::DepartmentsRoadsTransport, "சாலைகள் மற்றும் போக்குவரத்து"),
    (K::DepartmentsRoadsTransportDesc, "குழிகள், முடிக்கப்படாத சாலை வேலைகள், சாலை அழிவுகள் மற்றும் போக்குவரத்து பிரச்சினைகள்"),
    (K::DepartmentsHealthSanitation, "சுகாதாரம் மற்றும் தூய்மை"),
    (K::DepartmentsHealthSanitationDesc, "குப்பை சேகரிப்பு, சுகாதார பிரச்சினைகள், துடைக்கப்படாத தெருக்கள் மற்றும் தூய்மை பிரச்சினைகள்"),
    (K::DepartmentsSewageDrainage, "கழிவுநீர் மற்றும் வடிகால்"),
    (K::DepartmentsSewageDrainageDesc, "அடைப்பு வடிகால்கள், கழிவுநீர் கசிவுகள், கொசு இனப்பெருக்கம் மற்றும் வடிகால் பிரச்சினைகள்"),
    (K::ComplaintSubmitComplaint, "குறையைச் சமர்ப்பிக்கவும்"),
    (K::ComplaintSubmit, "குறையைச் சமர்ப்பிக்கவும்"),
    (K::StaffDashboard, "ஊழியர் டாஷ்போர்டு"),
    (K::CommonLocation, "இடம்:"),
    (K::CommonFillRequired, "தேவையான புலங்களை நிரப்பவும்"),
];

pub(super) const TELUGU: &[(K, &str)] = &[
    (K::AuthWelcome, "స్వాగతం"),
    (K::AuthCitizen, "పౌరుడు"),
    (K::AuthStaff, "సిబ్బంది"),
    (K::HeaderMunicipalPortal, "మునిసిపల్ పోర్టల్"),
    (K::HeaderGrievanceSystem, "ఫిర్యాదుల పరిష్కార వ్యవస్థ"),
    (K::LocationSelectLocation, "మీ స్థానాన్ని ఎంచుకోండి"),
    (K::LocationState, "రాష్ట్రం"),
    (K::LocationDistrict, "జిల్లా"),
    (K::DepartmentsTitle, "విభాగాన్ని ఎంచుకోండి"),
    (K::DepartmentsElectricity, "విద్యుత్"),
    (K::DepartmentsWaterSupply, "నీటి సరఫరా"),
    (K::ComplaintSubmitComplaint, "ఫిర్యాదు దాఖలు చేయండి"),
    (K::StaffDashboard, "సిబ్బంది డాష్‌బోర్డ్"),
    (K::CommonLocation, "స్థానం:"),
];

pub(super) const BENGALI: &[(K, &str)] = &[
    (K::AuthWelcome, "স্বাগতম"),
    (K::AuthCitizen, "নাগরিক"),
    (K::AuthStaff, "কর্মচারী"),
    (K::HeaderMunicipalPortal, "পৌর পোর্টাল"),
    (K::HeaderGrievanceSystem, "অভিযোগ নিষ্পত্তি ব্যবস্থা"),
    (K::LocationSelectLocation, "আপনার অবস্থান নির্বাচন করুন"),
    (K::LocationState, "রাজ্য"),
    (K::LocationDistrict, "জেলা"),
    (K::DepartmentsTitle, "বিভাগ নির্বাচন করুন"),
    (K::DepartmentsElectricity, "বিদ্যুৎ"),
    (K::DepartmentsWaterSupply, "জল সরবরাহ"),
    (K::ComplaintSubmitComplaint, "অভিযোগ জমা দিন"),
    (K::StaffDashboard, "কর্মচারী ড্যাশবোর্ড"),
    (K::CommonLocation, "অবস্থান:"),
];
