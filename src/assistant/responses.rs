//! Canned guidance text per intent category.

use super::intent::IntentCategory;

/// Ordered secondary-keyword responses plus the mandatory default for one category.
#[derive(Debug, Clone, Copy)]
pub struct ResponseSet {
    /// `(keyword, response)` pairs checked in order.
    pub specific: &'static [(&'static str, &'static str)],
    /// Returned when no secondary keyword matches.
    pub default: &'static str,
}

const MEDICAL_BLEEDING: &str = "🩹 **For bleeding control:**
1. Apply direct pressure with clean cloth/bandage
2. Elevate the wound above heart level if possible
3. Don't remove objects stuck in wound
4. Call 102 for ambulance immediately
5. Keep the person calm and lying down

⚠️ **Call 102 or 112 for severe bleeding!**";

const MEDICAL_SNAKE: &str = "🐍 **Snake bite emergency:**
1. Keep the person calm and still
2. Remove jewelry near bite area
3. Mark swelling progression with pen
4. DON'T cut, suck, or apply ice
5. Get to hospital immediately - call 102

🏥 **India has anti-venom available at most hospitals**";

const MEDICAL_DEFAULT: &str = "🏥 **Medical Emergency Protocol:**
- For life-threatening: Call 102 (Ambulance) or 112
- Keep patient calm and comfortable
- Don't give food/water if unconscious
- Note symptoms and time of onset
- Have ID ready for hospital

What specific medical situation are you facing?";

const LEGAL_POLICE: &str = "👮‍♂️ **Your Rights with Police:**
- Right to remain silent (Article 20)
- Right to know charges against you
- Right to lawyer during questioning
- Police cannot check phone without warrant
- Right to inform family of arrest

⚖️ **Remember: This is general guidance, not legal advice**";

const LEGAL_HARASSMENT: &str = "🛡️ **Harassment Response:**
1. Document everything (screenshots, witnesses)
2. Report to local police station
3. Women: Call 1091 (Women Helpline)
4. Online harassment: Report to 1930 (Cyber Crime)
5. Know your rights under IPC Section 354

📞 **Immediate help: 100 (Police) or 112**";

const LEGAL_DEFAULT: &str = "⚖️ **Legal Rights Information:**
- Right to Fair Trial (Article 21)
- Right to Legal Representation
- Protection from Self-Incrimination
- Right to Know Charges
- Protection from Illegal Detention

What specific legal situation do you need help with?";

const CONTACTS_DEFAULT: &str = "📞 **Emergency Numbers India:**
🚨 **112** - All Emergencies (National)
👮 **100** - Police
🚒 **101** - Fire Department
🏥 **102** - Ambulance
👩 **1091** - Women Helpline
👶 **1098** - Child Helpline
🌊 **108** - Disaster Management

Would you like me to help you call any of these numbers?";

const RESPONSE_FIRE: &str = "🔥 **House Fire Emergency:**
1. GET OUT immediately - don't gather belongings
2. Crawl low under smoke
3. Feel doors before opening (hot = fire behind)
4. Call 101 (Fire) once safe outside
5. Meet at predetermined family meeting point

🚨 **Never go back inside burning building!**";

const RESPONSE_FLOOD: &str = "🌊 **Flood Safety Protocol:**
1. Move to higher ground immediately
2. Avoid walking/driving through flood water
3. Call 108 (NDMA) for rescue coordination
4. Stay away from electrical equipment
5. Drink only bottled/boiled water

📱 **Monitor local admin alerts for evacuation orders**";

const RESPONSE_DEFAULT: &str = "⚡ **General Emergency Response:**
1. Stay calm and assess the situation
2. Ensure your immediate safety first
3. Call appropriate emergency number
4. Follow instructions from authorities
5. Have emergency kit ready

What type of emergency are you facing?";

const FACT_CHECK_DEFAULT: &str = "🔍 **Fact Verification Help:**
- Cross-check with reliable sources (PIB, MyGov)
- Look for official government statements
- Avoid sharing unverified information
- Report fake news to authorities

🚫 **During emergencies, misinformation can be deadly!**

What information would you like me to help verify?";

const GENERAL_DEFAULT: &str = "🤖 **I can help you with:**
- 🏥 Medical emergencies & first aid
- 👮‍♂️ Legal rights & police interactions
- 📞 Emergency contact numbers
- 🌊 Disaster response protocols
- ✅ Fact-checking information

**Quick Actions:**
- Say \"medical emergency\" for first aid
- Say \"police rights\" for legal guidance
- Say \"emergency numbers\" for contacts

What do you need help with today?";

/// What: Return the response table owned by a category.
///
/// Inputs:
/// - `category`: Category whose responses to return
///
/// Output:
/// - `ResponseSet` with ordered secondary keywords and the default text
#[must_use]
pub const fn responses_for(category: IntentCategory) -> ResponseSet {
    match category {
        IntentCategory::Medical => ResponseSet {
            specific: &[("bleeding", MEDICAL_BLEEDING), ("snake", MEDICAL_SNAKE)],
            default: MEDICAL_DEFAULT,
        },
        IntentCategory::Legal => ResponseSet {
            specific: &[("police", LEGAL_POLICE), ("harassment", LEGAL_HARASSMENT)],
            default: LEGAL_DEFAULT,
        },
        IntentCategory::EmergencyContacts => ResponseSet {
            specific: &[],
            default: CONTACTS_DEFAULT,
        },
        IntentCategory::EmergencyResponse => ResponseSet {
            specific: &[("fire", RESPONSE_FIRE), ("flood", RESPONSE_FLOOD)],
            default: RESPONSE_DEFAULT,
        },
        IntentCategory::FactCheck => ResponseSet {
            specific: &[],
            default: FACT_CHECK_DEFAULT,
        },
        IntentCategory::General => ResponseSet {
            specific: &[],
            default: GENERAL_DEFAULT,
        },
    }
}

/// What: Select the canned response for a message within a category.
///
/// Inputs:
/// - `text`: Raw user message
/// - `category`: Category the message was classified into
///
/// Output:
/// - Response of the first secondary keyword contained in the lower-cased
///   text, or the category default
///
/// Details:
/// - Works for any category/text pair, including ones `classify` would not produce
pub fn respond(text: &str, category: IntentCategory) -> &'static str {
    let lower = text.to_lowercase();
    let set = responses_for(category);
    set.specific
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(set.default, |(_, response)| *response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secondary_keyword_selects_specific_response() {
        assert_eq!(
            respond("I'm bleeding badly", IntentCategory::Medical),
            MEDICAL_BLEEDING
        );
        assert_eq!(
            respond("🐍 Snake Bite", IntentCategory::Medical),
            MEDICAL_SNAKE
        );
        assert_eq!(
            respond("What to do in a house fire?", IntentCategory::EmergencyResponse),
            RESPONSE_FIRE
        );
    }

    #[test]
    fn falls_back_to_category_default() {
        assert_eq!(
            respond("unrelated gibberish", IntentCategory::Medical),
            MEDICAL_DEFAULT
        );
        assert_eq!(respond("", IntentCategory::General), GENERAL_DEFAULT);
        assert_eq!(
            respond("bleeding", IntentCategory::EmergencyContacts),
            CONTACTS_DEFAULT
        );
    }

    #[test]
    fn first_declared_secondary_keyword_wins() {
        assert_eq!(
            respond("police harassment", IntentCategory::Legal),
            LEGAL_POLICE
        );
        assert_eq!(
            respond("flood then fire", IntentCategory::EmergencyResponse),
            RESPONSE_FIRE
        );
    }

    #[test]
    fn every_category_has_non_empty_default() {
        for category in IntentCategory::ALL {
            assert!(!responses_for(category).default.trim().is_empty());
        }
    }
}
