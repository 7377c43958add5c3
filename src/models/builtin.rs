//! Starter units that ship with the app. They cannot be deleted.
use super::{FlashCard, Unit};

/// Unit selected on start-up and after the active custom unit is deleted.
pub const DEFAULT_UNIT_ID: &str = "alphabet";

/// (id, label) for each starter unit, in display order.
pub const BUILTIN_LABELS: [(&str, &str); 10] = [
    ("alphabet", "Unit 1: 🔤 The Alphabet"),
    ("basics", "Unit 2: 👋 Survival Basics"),
    ("numbers", "Unit 3: 🔢 Numbers"),
    ("family", "Unit 4: 👪 Family"),
    ("colors", "Unit 5: 🎨 Colors"),
    ("food", "Unit 6: 🥟 Food & Drink"),
    ("places", "Unit 7: 🏛️ Places"),
    ("verbs", "Unit 8: 🏃 Common Verbs"),
    ("questions", "Unit 9: ❓ Questions"),
    ("emergency", "Unit 10: 🚑 Emergency"),
];

pub fn is_builtin(id: &str) -> bool {
    BUILTIN_LABELS.iter().any(|(builtin, _)| *builtin == id)
}

pub fn builtin_label(id: &str) -> Option<&'static str> {
    BUILTIN_LABELS
        .iter()
        .find(|(builtin, _)| *builtin == id)
        .map(|(_, label)| *label)
}

fn card(front: &str, translation: &str, phonetic: &str, context: &str) -> FlashCard {
    FlashCard::new(front, translation, phonetic, context)
}

/// Builds all starter units in display order.
pub fn builtin_units() -> Vec<Unit> {
    BUILTIN_LABELS
        .iter()
        .map(|(id, label)| Unit {
            id: id.to_string(),
            name: label.to_string(),
            icon: None,
            cards: builtin_cards(id),
        })
        .collect()
}

#[rustfmt::skip]
fn builtin_cards(id: &str) -> Vec<FlashCard> {
    match id {
        "alphabet" => vec![
            card("А а", "a", "ah", "As in 'father'. Арбуз means watermelon."),
            card("Б б", "b", "beh", "As in 'bed'. Бабушка means grandmother."),
            card("В в", "v", "veh", "Looks like B but sounds like V. Вода means water."),
            card("Г г", "g", "geh", "Hard G as in 'go'. Город means city."),
            card("Д д", "d", "deh", "As in 'dog'. Дом means house."),
            card("Ж ж", "zh", "zheh", "Like the S in 'pleasure'. Жук means beetle."),
            card("Ы ы", "y", "ih", "No English equivalent; say 'ee' with the tongue pulled back."),
            card("Я я", "ya", "yah", "As in 'yard'. Я also means 'I'."),
        ],
        "basics" => vec![
            card("Привет", "Hi", "pree-VYET", "Informal greeting for friends."),
            card("Здравствуйте", "Hello", "ZDRAST-vooy-tyeh", "Formal greeting; the first в is silent."),
            card("Спасибо", "Thank you", "spa-SEE-ba", "Большое спасибо means thank you very much."),
            card("Пожалуйста", "Please / You're welcome", "pa-ZHAL-sta", "Used both to ask and to answer thanks."),
            card("Да", "Yes", "da", "Да, конечно! means yes, of course!"),
            card("Нет", "No", "nyet", "Also used for 'there is none'."),
            card("Извините", "Excuse me / Sorry", "iz-vee-NEE-tyeh", "Polite way to get attention."),
        ],
        "numbers" => vec![
            card("Один", "One", "a-DEEN", "Changes to одна for feminine nouns."),
            card("Два", "Two", "dva", "Два кофе, пожалуйста. Two coffees, please."),
            card("Три", "Three", "tree", "Три медведя is the Russian 'Three Bears'."),
            card("Четыре", "Four", "chee-TY-ree", "Stress falls on the middle syllable."),
            card("Пять", "Five", "pyat'", "Also the top school grade in Russia."),
            card("Десять", "Ten", "DYE-syat'", "Basis for двадцать (20) and тридцать (30)."),
            card("Сто", "One hundred", "sto", "Сто рублей is one hundred roubles."),
        ],
        "family" => vec![
            card("Мама", "Mom", "MA-ma", "Affectionate everyday word."),
            card("Папа", "Dad", "PA-pa", "Masculine noun despite the -а ending."),
            card("Бабушка", "Grandmother", "BA-boosh-ka", "The heart of many Russian households."),
            card("Дедушка", "Grandfather", "DYE-doosh-ka", "Дед Мороз is Grandfather Frost."),
            card("Брат", "Brother", "brat", "Also slang for a close friend."),
            card("Сестра", "Sister", "sees-TRA", "Also means nurse in a hospital."),
        ],
        "colors" => vec![
            card("Красный", "Red", "KRAS-nyy", "Once meant 'beautiful', hence Красная площадь."),
            card("Синий", "Dark blue", "SEE-nee", "Russian treats dark and light blue as different colors."),
            card("Голубой", "Light blue", "ga-loo-BOY", "The color of a clear sky."),
            card("Зелёный", "Green", "zee-LYO-nyy", "Зелёный чай is green tea."),
            card("Белый", "White", "BYE-lyy", "Белые ночи are the White Nights of St Petersburg."),
            card("Чёрный", "Black", "CHOR-nyy", "Чёрный хлеб is rye bread."),
        ],
        "food" => vec![
            card("Хлеб", "Bread", "khlyep", "Хлеб-соль is the traditional welcome."),
            card("Вода", "Water", "va-DA", "Вода без газа is still water."),
            card("Чай", "Tea", "chai", "Often served with jam or lemon."),
            card("Борщ", "Borscht", "borshch", "Beet soup, served with сметана."),
            card("Пельмени", "Dumplings", "peel'-MYE-nee", "Siberian meat dumplings."),
            card("Счёт, пожалуйста", "The bill, please", "shchot pa-ZHAL-sta", "Said to the waiter at the end of a meal."),
        ],
        "places" => vec![
            card("Вокзал", "Train station", "vak-ZAL", "Named after London's Vauxhall."),
            card("Аэропорт", "Airport", "a-e-ra-PORT", "Шереметьево is a Moscow airport."),
            card("Гостиница", "Hotel", "gas-TEE-nee-tsa", "Also отель in modern speech."),
            card("Аптека", "Pharmacy", "ap-TYE-ka", "Look for the green cross."),
            card("Метро", "Subway", "mee-TRO", "Moscow stations are famous for their chandeliers."),
            card("Магазин", "Shop", "ma-ga-ZEEN", "Продуктовый магазин is a grocery store."),
        ],
        "verbs" => vec![
            card("Быть", "To be", "byt'", "Usually dropped in the present tense."),
            card("Говорить", "To speak", "ga-va-REET'", "Вы говорите по-английски? Do you speak English?"),
            card("Понимать", "To understand", "pa-nee-MAT'", "Я не понимаю. I don't understand."),
            card("Хотеть", "To want", "kha-TYET'", "Я хочу чай. I want tea."),
            card("Идти", "To go (on foot)", "eet-TEE", "Пойдём! Let's go!"),
            card("Есть", "To eat", "yest'", "Also means 'there is'."),
        ],
        "questions" => vec![
            card("Что?", "What?", "shto", "Что это? What is this?"),
            card("Где?", "Where?", "gdye", "Где туалет? Where is the toilet?"),
            card("Когда?", "When?", "kag-DA", "Когда поезд? When is the train?"),
            card("Сколько стоит?", "How much is it?", "SKOL'-ka STO-eet", "Essential at every market."),
            card("Почему?", "Why?", "pa-chee-MOO", "Answered with потому что, because."),
            card("Как дела?", "How are you?", "kak dee-LA", "Answer: хорошо, fine."),
        ],
        "emergency" => vec![
            card("Помогите!", "Help!", "pa-ma-GEE-tyeh", "Shout it loudly."),
            card("Врач", "Doctor", "vrach", "Мне нужен врач. I need a doctor."),
            card("Полиция", "Police", "pa-LEE-tsee-ya", "Emergency number is 112."),
            card("Больница", "Hospital", "bal'-NEE-tsa", "Скорая помощь is an ambulance."),
            card("Пожар", "Fire", "pa-ZHAR", "Call 101 for the fire service."),
            card("Я потерялся", "I am lost", "ya pa-tee-RYAL-sya", "A woman says я потерялась."),
        ],
        _ => Vec::new(),
    }
}
