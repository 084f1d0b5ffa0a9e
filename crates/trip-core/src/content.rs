//! Compiled-in page content.
//!
//! Everything the panels display lives here as plain `'static` records so
//! the view layer only has to lay them out.

use crate::assets::AssetId;
use crate::navigation::Panel;

/// Lucide icon names used across the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Calendar,
    MapPin,
    Coffee,
    Utensils,
    Home,
    AlertCircle,
    Sparkles,
    Heart,
    Train,
    Camera,
    Volleyball,
}

/// Header, intro and footer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteChrome {
    pub title: &'static str,
    pub date_range: &'static str,
    pub greeting: &'static str,
    pub guest_name: &'static str,
    pub enter_label: &'static str,
    pub intro_tagline: &'static str,
    pub game_title: &'static str,
    pub game_prompt: &'static str,
    pub footer_prefix: &'static str,
    pub footer_suffix: &'static str,
}

pub const CHROME: SiteChrome = SiteChrome {
    title: "阿堡生日遊",
    date_range: "2026.01.24 - 01.25",
    greeting: "Happy Birthday",
    guest_name: "阿堡",
    enter_label: "開啟你的流浪旅程",
    intro_tagline: "高雄 / 美食 / 驚喜",
    game_title: "猜猜我們要去哪裡？",
    game_prompt: "輸入你心中的目的地",
    footer_prefix: "Made with",
    footer_suffix: "for Abao",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub time: &'static str,
    pub title: &'static str,
    pub icon: Icon,
    pub content: &'static str,
    pub highlight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItineraryDay {
    pub number: u8,
    pub heading: &'static str,
    pub entries: &'static [TimelineEntry],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodItem {
    pub name: &'static str,
    pub tag: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub items: &'static [FoodItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodGuide {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub categories: &'static [FoodCategory],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotelFeature {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotelInfo {
    pub name: &'static str,
    pub english_name: &'static str,
    pub badge: &'static str,
    pub photo: AssetId,
    pub features: &'static [HotelFeature],
    pub note_title: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeItem {
    pub num: u8,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DressCode {
    pub title: &'static str,
    pub lead: &'static str,
    pub color_name: &'static str,
    pub advice: &'static str,
    /// Rendered fully transparent
    pub aside: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeBoard {
    pub heading: &'static str,
    pub items: &'static [NoticeItem],
    pub dress_code: DressCode,
    pub countdown: &'static str,
}

/// Content record set for one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelContent {
    Itinerary(&'static [ItineraryDay]),
    Food(&'static FoodGuide),
    Hotel(&'static HotelInfo),
    Notice(&'static NoticeBoard),
}

/// Immutable content for the given panel.
pub fn content_for(panel: Panel) -> PanelContent {
    match panel {
        Panel::Itinerary => PanelContent::Itinerary(ITINERARY),
        Panel::Food => PanelContent::Food(&FOOD),
        Panel::Hotel => PanelContent::Hotel(&HOTEL),
        Panel::Notice => PanelContent::Notice(&NOTICE),
    }
}

pub const ITINERARY: &[ItineraryDay] = &[
    ItineraryDay {
        number: 1,
        heading: "1/24 (六) 高雄流浪記",
        entries: &[
            TimelineEntry {
                time: "09:01",
                title: "高鐵出發",
                icon: Icon::Train,
                content: "台北 → 左營 (1309車次)。帶著好心情南下囉！",
                highlight: false,
            },
            TimelineEntry {
                time: "11:40",
                title: "抵達飯店寄行李",
                icon: Icon::Home,
                content: "前往「福容徠旅」。先丟包行李，開啟輕裝模式！",
                highlight: false,
            },
            TimelineEntry {
                time: "12:30",
                title: "在地午餐時光",
                icon: Icon::Utensils,
                content: "前金/鹽埕區探險。興隆居湯包 或 鴨肉珍，看心情決定！",
                highlight: false,
            },
            TimelineEntry {
                time: "14:30",
                title: "自由黃昏市場",
                icon: Icon::Utensils,
                content: "在地人的廚房！買點滷味、炸物墊墊胃，為晚上儲備體力。",
                highlight: false,
            },
            TimelineEntry {
                time: "17:00",
                title: "巨蛋周邊散策",
                icon: Icon::Sparkles,
                content: "前往巨蛋廣場感受週末熱鬧氣氛！聽說今天這裡人很多，我們去湊湊熱鬧，買買小物，記得穿上我們的幸運色「寶藍色」喔！",
                highlight: true,
            },
            TimelineEntry {
                time: "21:30",
                title: "飯店 Check-in",
                icon: Icon::Home,
                content: "回飯店休息，如果趕得上還能喝免費飲料！",
                highlight: false,
            },
        ],
    },
    ItineraryDay {
        number: 2,
        heading: "1/25 (日) 熱血與美食",
        entries: &[
            TimelineEntry {
                time: "09:30",
                title: "睡飽吃早餐",
                icon: Icon::Coffee,
                content: "享受飯店早餐 (07:00-11:00)，補充滿滿元氣。",
                highlight: false,
            },
            TimelineEntry {
                time: "11:30",
                title: "市區漫遊",
                icon: Icon::Camera,
                content: "愛河散步或駁二特區，享受港都的陽光與藝術氣息。",
                highlight: false,
            },
            TimelineEntry {
                time: "13:00",
                title: "樂活時光",
                icon: Icon::Coffee,
                content: "回飯店大廳吹冷氣，享受免費點心與飲料，避開正午太陽。",
                highlight: false,
            },
            TimelineEntry {
                time: "15:00",
                title: "熱血排球賽",
                icon: Icon::Volleyball,
                content: "鳳山體育館：台鋼天鷹 vs 臺中連莊。一起大聲吶喊！",
                highlight: false,
            },
            TimelineEntry {
                time: "19:00",
                title: "快樂賦歸",
                icon: Icon::Train,
                content: "左營 → 台北 (149/678車次)。帶著滿滿回憶回家。",
                highlight: false,
            },
        ],
    },
];

pub static FOOD: FoodGuide = FoodGuide {
    heading: "高雄必吃清單",
    subheading: "跟著在地人吃就對了",
    categories: &[
        FoodCategory {
            title: "前金 / 鹽埕 (飯店周邊)",
            icon: Icon::MapPin,
            items: &[
                FoodItem { name: "興隆居", tag: "傳統早餐", desc: "傳說中的爆汁湯包，排隊也要吃！" },
                FoodItem { name: "前金肉燥飯", tag: "米其林推薦", desc: "必點：肉燥飯 + 半熟流汁鴨蛋包，銷魂組合。" },
                FoodItem { name: "七賢鴨肉飯", tag: "深夜食堂", desc: "軟嫩鴨肉配上香濃鴨油飯，當歸湯必喝。" },
                FoodItem { name: "小南碗粿", tag: "古早味", desc: "軟Q碗粿配上獨門醬料，就在自強二路。" },
                FoodItem { name: "松藝奶茶", tag: "文青飲品", desc: "老宅裡的鍋煮奶茶，適合午後歇腳。" },
            ],
        },
        FoodCategory {
            title: "鳳山區 (球賽周邊)",
            icon: Icon::MapPin,
            items: &[
                FoodItem { name: "李家肉圓", tag: "珍珠肉圓", desc: "一口一顆剛剛好，皮Q肉紮實，漲價還是要吃。" },
                FoodItem { name: "兵仔市無名肉燥飯", tag: "市場老味", desc: "隱藏版排隊名店，魚皮湯＋肉燥飯是標配。" },
                FoodItem { name: "老周冷熱冰", tag: "甜點", desc: "熱湯圓遇上剉冰，冷熱交替的奇妙口感。" },
                FoodItem { name: "STORY Restaurant", tag: "義式", desc: "巷弄內的隱藏版，煙花女義大利麵很有名。" },
            ],
        },
    ],
};

pub static HOTEL: HotelInfo = HotelInfo {
    name: "福容徠旅 高雄",
    english_name: "Fullon Poshtel Kaohsiung",
    badge: "壽星入住",
    photo: AssetId::HotelPhoto,
    features: &[
        HotelFeature {
            icon: Icon::MapPin,
            title: "絕佳位置",
            desc: "前金區，捷運市議會站 (O4) 4號出口步行2分鐘。",
        },
        HotelFeature {
            icon: Icon::Coffee,
            title: "早餐時光",
            desc: "07:00 - 11:00，睡飽飽再吃。",
        },
        HotelFeature {
            icon: Icon::Sparkles,
            title: "樂活時光 (Lohas Time)",
            desc: "13:00 - 22:00，提供免費飲料與零食！",
        },
    ],
    note_title: "給阿堡的特別備註",
    note: "雖然這次是來這裡「流浪」的，但住的地方絕對不能馬虎！IKEA 風格設計，簡約又舒適，就在橘線上，去哪都方便！",
};

pub static NOTICE: NoticeBoard = NoticeBoard {
    heading: "出發前請閱讀",
    items: &[
        NoticeItem {
            num: 1,
            title: "🎒 絕對要輕便行李！",
            desc: "Day 1 下午我們會去逛市場和散步，行李太重會變成累贅喔！帶一套換洗衣物即可。",
        },
        NoticeItem {
            num: 2,
            title: "👟 穿最好走的鞋",
            desc: "兩天的行程包含逛市場、散步，舒適的球鞋是必備的。",
        },
        NoticeItem {
            num: 3,
            title: "🌞 南國豔陽",
            desc: "高雄太陽很熱情，記得帶防曬乳或帽子。",
        },
    ],
    dress_code: DressCode {
        title: "神秘 Dress Code",
        lead: "據說這兩天高雄的幸運色是",
        color_name: "「寶藍色」",
        advice: "建議阿堡身上可以帶點寶藍色元素（衣服、飾品皆可），走在巨蛋附近可能會遇到好事喔！",
        aside: "（SJ應援色嘿嘿）",
    },
    countdown: "距離出發倒數：1/24 見",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_panel_has_content() {
        assert!(matches!(content_for(Panel::Itinerary), PanelContent::Itinerary(days) if days.len() == 2));
        assert!(matches!(content_for(Panel::Food), PanelContent::Food(_)));
        assert!(matches!(content_for(Panel::Hotel), PanelContent::Hotel(_)));
        assert!(matches!(content_for(Panel::Notice), PanelContent::Notice(_)));
    }

    #[test]
    fn test_only_dome_visit_is_highlighted() {
        let highlighted: Vec<&str> = ITINERARY
            .iter()
            .flat_map(|day| day.entries.iter())
            .filter(|e| e.highlight)
            .map(|e| e.time)
            .collect();
        assert_eq!(highlighted, vec!["17:00"]);
    }

    #[test]
    fn test_food_category_sizes() {
        let sizes: Vec<usize> = FOOD.categories.iter().map(|c| c.items.len()).collect();
        assert_eq!(sizes, vec![5, 4]);
    }

    #[test]
    fn test_notice_numbers_are_ordered() {
        let nums: Vec<u8> = NOTICE.items.iter().map(|n| n.num).collect();
        assert_eq!(nums, vec![1, 2, 3]);
    }
}
