// src/core/seed.rs

/// Built-in English → Hindi entries every lexicon starts from.
#[rustfmt::skip]
pub const BASE_ENTRIES: &[(&str, &str)] = &[
    // Numerals
    ("zero", "शून्य"), ("one", "एक"), ("two", "दो"), ("three", "तीन"), ("four", "चार"),
    ("five", "पांच"), ("six", "छः"), ("seven", "सात"), ("eight", "आठ"), ("nine", "नौ"),
    ("ten", "दस"),

    // Verbs
    ("is", "है"), ("am", "हूँ"), ("are", "हैं"), ("was", "था"), ("were", "थे"), ("go", "जाना"),
    ("come", "आना"), ("eat", "खाना"), ("drink", "पीना"), ("sleep", "सोना"), ("walk", "चलना"),
    ("run", "दौड़ना"), ("talk", "बात करना"), ("read", "पढ़ना"), ("write", "लिखना"),
    ("see", "देखना"), ("hear", "सुनना"), ("know", "जानना"), ("think", "सोचना"),
    ("feel", "महसूस करना"), ("love", "प्यार करना"), ("like", "पसंद करना"), ("want", "चाहना"),
    ("need", "आवश्यकता होना"), ("have", "रखना"), ("give", "देना"), ("take", "लेना"),
    ("make", "बनाना"), ("do", "करना"),

    // Pronouns
    ("i", "मैं"), ("me", "मुझे"), ("my", "मेरा"), ("mine", "मेरा"), ("you", "तुम"),
    ("your", "तुम्हारा"), ("yours", "तुम्हारा"), ("he", "वह"), ("him", "उसे"), ("his", "उसका"),
    ("she", "वह"), ("her", "उसकी"), ("hers", "उसकी"), ("it", "यह"), ("its", "इसका"),
    ("we", "हम"), ("us", "हमें"), ("our", "हमारा"), ("ours", "हमारा"), ("they", "वे"),
    ("them", "उन्हें"), ("their", "उनका"), ("theirs", "उनका"),

    // Nouns
    ("man", "आदमी"), ("woman", "औरत"), ("child", "बच्चा"), ("boy", "लड़का"), ("girl", "लड़की"),
    ("house", "घर"), ("car", "कार"), ("book", "किताब"), ("water", "पानी"), ("food", "खाना"),
    ("friend", "दोस्त"), ("family", "परिवार"), ("mother", "माँ"), ("father", "पिता"),
    ("time", "समय"), ("day", "दिन"), ("night", "रात"), ("morning", "सुबह"), ("evening", "शाम"),
    ("school", "स्कूल"), ("work", "काम"), ("office", "कार्यालय"), ("home", "घर"),

    // Conjunctions and prepositions
    ("and", "और"), ("but", "लेकिन"), ("or", "या"), ("if", "अगर"), ("because", "क्योंकि"),
    ("with", "के साथ"), ("without", "के बिना"), ("in", "में"), ("on", "पर"), ("at", "पर"),
    ("for", "के लिए"), ("from", "से"), ("to", "को"), ("until", "तक"), ("after", "के बाद"),
    ("before", "के पहले"), ("between", "के बीच"), ("under", "के नीचे"), ("over", "के ऊपर"),

    // Adjectives
    ("good", "अच्छा"), ("bad", "बुरा"), ("big", "बड़ा"), ("small", "छोटा"), ("high", "ऊंचा"),
    ("low", "नीचा"), ("long", "लंबा"), ("short", "छोटा"), ("hot", "गरम"), ("cold", "ठंडा"),
    ("new", "नया"), ("old", "पुराना"), ("young", "जवान"), ("happy", "खुश"), ("sad", "दुखी"),
    ("beautiful", "सुंदर"), ("ugly", "बदसूरत"), ("rich", "अमीर"), ("poor", "गरीब"),

    // Question words
    ("what", "क्या"), ("who", "कौन"), ("where", "कहाँ"), ("when", "कब"), ("why", "क्यों"),
    ("how", "कैसे"),

    // Technology
    ("computer", "कंप्यूटर"), ("internet", "इंटरनेट"), ("program", "प्रोग्राम"),
    ("software", "सॉफ्टवेयर"), ("language", "भाषा"), ("code", "कोड"), ("python", "पायथन"),

    // Greetings and everyday words
    ("hello", "नमस्ते"), ("world", "दुनिया"), ("yes", "हाँ"), ("no", "नहीं"),
    ("please", "कृपया"), ("thank", "धन्यवाद"), ("sorry", "माफ़ कीजिए"),
    ("welcome", "स्वागत है"), ("this", "यह"), ("that", "वह"), ("these", "ये"), ("those", "वे"),
    ("here", "यहाँ"), ("there", "वहाँ"), ("today", "आज"), ("tomorrow", "कल"),
    ("yesterday", "कल"), ("now", "अब"), ("later", "बाद में"), ("example", "उदाहरण"),
    ("simple", "सरल"), ("powerful", "शक्तिशाली"), ("every", "हर"), ("all", "सब"),
    ("some", "कुछ"), ("many", "बहुत"),
];
