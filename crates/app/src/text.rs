//! Bilingual UI strings, looked up by `(TextId, Language)`.

use quiz_core::model::{Language, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextId {
    AppTitle,
    Tagline,
    SelectLevel,
    AboutTitle,
    AboutBody,
    ContactTitle,
    ContactBody,
    HelpTitle,
    HelpBody,
    ProfileTitle,
    Username,
    MemberSince,
    TotalPoints,
    QuizzesTaken,
    AverageScore,
    Achievements,
    SetupTitle,
    SetupPrompt,
    QuizTitle,
    QuestionLabel,
    ResultsTitle,
    ScoreLabel,
    AttemptLabel,
    ResultsPrompt,
    Correct,
    Incorrect,
    NotANumber,
    LanguageSwitched,
    Goodbye,
}

impl TextId {
    #[cfg(test)]
    pub const ALL: [TextId; 29] = [
        TextId::AppTitle,
        TextId::Tagline,
        TextId::SelectLevel,
        TextId::AboutTitle,
        TextId::AboutBody,
        TextId::ContactTitle,
        TextId::ContactBody,
        TextId::HelpTitle,
        TextId::HelpBody,
        TextId::ProfileTitle,
        TextId::Username,
        TextId::MemberSince,
        TextId::TotalPoints,
        TextId::QuizzesTaken,
        TextId::AverageScore,
        TextId::Achievements,
        TextId::SetupTitle,
        TextId::SetupPrompt,
        TextId::QuizTitle,
        TextId::QuestionLabel,
        TextId::ResultsTitle,
        TextId::ScoreLabel,
        TextId::AttemptLabel,
        TextId::ResultsPrompt,
        TextId::Correct,
        TextId::Incorrect,
        TextId::NotANumber,
        TextId::LanguageSwitched,
        TextId::Goodbye,
    ];

    /// Heading shown at the top of a page.
    #[must_use]
    pub fn title_for(page: Page) -> Self {
        match page {
            Page::Home => TextId::AppTitle,
            Page::About => TextId::AboutTitle,
            Page::Contact => TextId::ContactTitle,
            Page::Help => TextId::HelpTitle,
            Page::Profile => TextId::ProfileTitle,
            Page::QuizSetup => TextId::SetupTitle,
            Page::Quiz => TextId::QuizTitle,
            Page::Results => TextId::ResultsTitle,
        }
    }
}

#[must_use]
pub fn text(id: TextId, language: Language) -> &'static str {
    match language {
        Language::English => english(id),
        Language::Tamil => tamil(id),
    }
}

fn english(id: TextId) -> &'static str {
    match id {
        TextId::AppTitle => "Quiz Master",
        TextId::Tagline => "Test your knowledge!",
        TextId::SelectLevel => "Select Difficulty Level",
        TextId::AboutTitle => "About Us",
        TextId::AboutBody => {
            "Quiz Master is an innovative educational platform designed to make learning fun and engaging through interactive quizzes. Our mission is to provide accessible learning resources in multiple languages to help users expand their knowledge and skills."
        }
        TextId::ContactTitle => "Contact Us",
        TextId::ContactBody => {
            "Email: support@quizmaster.com\nPhone: +1 (555) 123-4567\nAddress: 123 Learning Street, Education City"
        }
        TextId::HelpTitle => "Help & Support",
        TextId::HelpBody => {
            "1. Select your preferred difficulty level to start a quiz.\n2. Answer questions to earn points and track your progress.\n3. Switch between languages using the toggle in the navigation bar."
        }
        TextId::ProfileTitle => "User Profile",
        TextId::Username => "Username:",
        TextId::MemberSince => "Member Since:",
        TextId::TotalPoints => "Total Points:",
        TextId::QuizzesTaken => "Quizzes Taken",
        TextId::AverageScore => "Average Score",
        TextId::Achievements => "Achievements",
        TextId::SetupTitle => "Quiz Setup",
        TextId::SetupPrompt => "How many questions? Type `start <n>` (default 10).",
        TextId::QuizTitle => "Quiz",
        TextId::QuestionLabel => "Question",
        TextId::ResultsTitle => "Quiz Results",
        TextId::ScoreLabel => "Score",
        TextId::AttemptLabel => "Attempt",
        TextId::ResultsPrompt => "Type `restart` to try again or `home` to go back.",
        TextId::Correct => "Correct!",
        TextId::Incorrect => "Incorrect. The answer was",
        TextId::NotANumber => "Please answer with a whole number.",
        TextId::LanguageSwitched => "Language: English",
        TextId::Goodbye => "Goodbye!",
    }
}

fn tamil(id: TextId) -> &'static str {
    match id {
        TextId::AppTitle => "வினா மாஸ்டர்",
        TextId::Tagline => "உங்கள் அறிவை சோதிக்கவும்!",
        TextId::SelectLevel => "சிரம நிலையைத் தேர்ந்தெடுக்கவும்",
        TextId::AboutTitle => "எங்களைப் பற்றி",
        TextId::AboutBody => {
            "வினா மாஸ்டர் என்பது ஊடாடும் வினாத்திட்டங்கள் மூலம் கற்றலை சுவாரஸ்யமாகவும் ஈர்க்கக்கூடியதாகவும் மாற்றுவதற்காக வடிவமைக்கப்பட்ட ஒரு புதுமையான கல்வி தளமாகும். பயனர்கள் தங்கள் அறிவையும் திறன்களையும் விரிவுபடுத்த உதவுவதற்காக பல மொழிகளில் அணுகக்கூடிய கற்றல் வளங்களை வழங்குவதே எங்கள் நோக்கம்."
        }
        TextId::ContactTitle => "எங்களை தொடர்பு கொள்ள",
        TextId::ContactBody => {
            "மின்னஞ்சல்: support@quizmaster.com\nதொலைபேசி: +1 (555) 123-4567\nமுகவரி: 123 கற்றல் தெரு, கல்வி நகரம்"
        }
        TextId::HelpTitle => "உதவி மற்றும் ஆதரவு",
        TextId::HelpBody => {
            "1. வினாத்திட்டத்தைத் தொடங்க உங்களுக்கு விருப்பமான சிரம நிலையைத் தேர்ந்தெடுக்கவும்.\n2. புள்ளிகள் பெறவும் உங்கள் முன்னேற்றத்தைக் கண்காணிக்கவும் கேள்விகளுக்கு பதிலளிக்கவும்.\n3. வழிசெலுத்தல் பட்டியில் உள்ள டோகிளைப் பயன்படுத்தி மொழிகளுக்கு இடையே மாறவும்."
        }
        TextId::ProfileTitle => "பயனர் சுயவிவரம்",
        TextId::Username => "பயனர்பெயர்:",
        TextId::MemberSince => "உறுப்பினர் முதல்:",
        TextId::TotalPoints => "மொத்த புள்ளிகள்:",
        TextId::QuizzesTaken => "எடுத்த வினாக்கள்",
        TextId::AverageScore => "சராசரி மதிப்பெண்",
        TextId::Achievements => "சாதனைகள்",
        TextId::SetupTitle => "வினா அமைப்பு",
        TextId::SetupPrompt => "எத்தனை கேள்விகள்? `start <n>` என தட்டச்சு செய்யவும் (இயல்பு 10).",
        TextId::QuizTitle => "வினா",
        TextId::QuestionLabel => "கேள்வி",
        TextId::ResultsTitle => "வினா முடிவுகள்",
        TextId::ScoreLabel => "மதிப்பெண்",
        TextId::AttemptLabel => "முயற்சி",
        TextId::ResultsPrompt => {
            "மீண்டும் முயற்சிக்க `restart` அல்லது திரும்பச் செல்ல `home` என தட்டச்சு செய்யவும்."
        }
        TextId::Correct => "சரி!",
        TextId::Incorrect => "தவறு. சரியான விடை",
        TextId::NotANumber => "முழு எண்ணாக பதிலளிக்கவும்.",
        TextId::LanguageSwitched => "மொழி: தமிழ்",
        TextId::Goodbye => "நன்றி, மீண்டும் வருக!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_is_translated() {
        for id in TextId::ALL {
            let en = text(id, Language::English);
            let ta = text(id, Language::Tamil);
            assert!(!en.is_empty(), "{id:?} missing English text");
            assert!(!ta.is_empty(), "{id:?} missing Tamil text");
            assert_ne!(en, ta, "{id:?} is not translated");
        }
    }

    #[test]
    fn every_page_has_a_title() {
        for page in Page::ALL {
            let id = TextId::title_for(page);
            assert!(TextId::ALL.contains(&id));
        }
        assert_eq!(text(TextId::title_for(Page::Home), Language::Tamil), "வினா மாஸ்டர்");
    }

    #[test]
    fn contact_page_lists_support_channels() {
        let en = text(TextId::ContactBody, Language::English);
        assert!(en.starts_with("Email: support@quizmaster.com"));
        assert!(en.contains("Phone: +1 (555) 123-4567"));
        assert!(text(TextId::ContactBody, Language::Tamil).contains("support@quizmaster.com"));
        assert_eq!(text(TextId::HelpTitle, Language::English), "Help & Support");
    }
}
