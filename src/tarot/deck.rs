// Tarot deck: 22 major arcana followed by cups, wands, swords and pentacles.
use super::{Arcana, TarotCard};

pub static CARDS: [TarotCard; 78] = [
    // Major
    TarotCard { id: "fool", name: "The Fool", arcana: Arcana::Major, meaning: "New adventures await. Trust the journey and take a leap of faith together!" },
    TarotCard { id: "magician", name: "The Magician", arcana: Arcana::Major, meaning: "You have everything you need to create magic in your relationship." },
    TarotCard { id: "priestess", name: "High Priestess", arcana: Arcana::Major, meaning: "Listen to your intuition. Silence speaks volumes today." },
    TarotCard { id: "empress", name: "The Empress", arcana: Arcana::Major, meaning: "Abundance, comfort, and nurturing love surround you." },
    TarotCard { id: "emperor", name: "The Emperor", arcana: Arcana::Major, meaning: "Stability and protection. Build a strong foundation together." },
    TarotCard { id: "hierophant", name: "The Hierophant", arcana: Arcana::Major, meaning: "Shared values and commitment. Tradition brings you closer." },
    TarotCard { id: "lovers", name: "The Lovers", arcana: Arcana::Major, meaning: "Perfect harmony and deep connection. A choice made out of love." },
    TarotCard { id: "chariot", name: "The Chariot", arcana: Arcana::Major, meaning: "Overcoming obstacles together. Move forward with confidence." },
    TarotCard { id: "strength", name: "Strength", arcana: Arcana::Major, meaning: "Patience and compassion. Soft power conquers all." },
    TarotCard { id: "hermit", name: "The Hermit", arcana: Arcana::Major, meaning: "Soul-searching. Spend some quality quiet time together." },
    TarotCard { id: "wheel", name: "Wheel of Fortune", arcana: Arcana::Major, meaning: "Good luck and destiny. A positive turning point is here." },
    TarotCard { id: "justice", name: "Justice", arcana: Arcana::Major, meaning: "Balance and fairness. Truth will strengthen your bond." },
    TarotCard { id: "hanged", name: "Hanged Man", arcana: Arcana::Major, meaning: "See things from a new perspective. Sometimes pausing is progress." },
    TarotCard { id: "death", name: "Death (Rebirth)", arcana: Arcana::Major, meaning: "Transformation. Letting go of the old to welcome a new chapter." },
    TarotCard { id: "temperance", name: "Temperance", arcana: Arcana::Major, meaning: "Balance and patience. Blending your lives in perfect measure." },
    TarotCard { id: "devil", name: "The Devil", arcana: Arcana::Major, meaning: "Passion and playful obsession. Enjoy the intensity!" },
    TarotCard { id: "tower", name: "The Tower", arcana: Arcana::Major, meaning: "Sudden change. Shake things up to build something better." },
    TarotCard { id: "star", name: "The Star", arcana: Arcana::Major, meaning: "Hope, healing, and inspiration. A bright future lies ahead." },
    TarotCard { id: "moon", name: "The Moon", arcana: Arcana::Major, meaning: "Dreams and mysteries. Trust your instincts and explore the unknown." },
    TarotCard { id: "sun", name: "The Sun", arcana: Arcana::Major, meaning: "Joy, success, and positivity. Your love is shining bright!" },
    TarotCard { id: "judgement", name: "Judgement", arcana: Arcana::Major, meaning: "Awakening and renewal. A call to rise to a higher level of love." },
    TarotCard { id: "world", name: "The World", arcana: Arcana::Major, meaning: "Completion and fulfillment. You mean the world to each other." },

    // Cups
    TarotCard { id: "ace_cups", name: "Ace of Cups", arcana: Arcana::Cups, meaning: "A new outpouring of love and emotional connection." },
    TarotCard { id: "2_cups", name: "Two of Cups", arcana: Arcana::Cups, meaning: "A partnership based on mutual attraction and unity." },
    TarotCard { id: "3_cups", name: "Three of Cups", arcana: Arcana::Cups, meaning: "Celebration, friendship, and happy times together." },
    TarotCard { id: "4_cups", name: "Four of Cups", arcana: Arcana::Cups, meaning: "Contemplation. Don't miss the love being offered to you." },
    TarotCard { id: "5_cups", name: "Five of Cups", arcana: Arcana::Cups, meaning: "Focusing on loss. Turn around to see what remains." },
    TarotCard { id: "6_cups", name: "Six of Cups", arcana: Arcana::Cups, meaning: "Nostalgia, childhood memories, and innocence." },
    TarotCard { id: "7_cups", name: "Seven of Cups", arcana: Arcana::Cups, meaning: "Many choices and daydreams. Focus on what matters." },
    TarotCard { id: "8_cups", name: "Eight of Cups", arcana: Arcana::Cups, meaning: "Walking away from what no longer serves you to find deeper meaning." },
    TarotCard { id: "9_cups", name: "Nine of Cups", arcana: Arcana::Cups, meaning: "Contentment, satisfaction, and wishes coming true." },
    TarotCard { id: "10_cups", name: "Ten of Cups", arcana: Arcana::Cups, meaning: "Divine love, happy family, and emotional fulfillment." },
    TarotCard { id: "page_cups", name: "Page of Cups", arcana: Arcana::Cups, meaning: "Creative opportunities and intuitive messages." },
    TarotCard { id: "knight_cups", name: "Knight of Cups", arcana: Arcana::Cups, meaning: "Romance, charm, and following your heart." },
    TarotCard { id: "queen_cups", name: "Queen of Cups", arcana: Arcana::Cups, meaning: "Compassion, calm, and emotional stability." },
    TarotCard { id: "king_cups", name: "King of Cups", arcana: Arcana::Cups, meaning: "Emotional balance and control. A wise heart." },

    // Wands
    TarotCard { id: "ace_wands", name: "Ace of Wands", arcana: Arcana::Wands, meaning: "Inspiration, new opportunities, and passion." },
    TarotCard { id: "2_wands", name: "Two of Wands", arcana: Arcana::Wands, meaning: "Future planning and progress. The world is yours." },
    TarotCard { id: "3_wands", name: "Three of Wands", arcana: Arcana::Wands, meaning: "Expansion and foresight. Your ships are coming in." },
    TarotCard { id: "4_wands", name: "Four of Wands", arcana: Arcana::Wands, meaning: "Celebration, joy, and returning home." },
    TarotCard { id: "5_wands", name: "Five of Wands", arcana: Arcana::Wands, meaning: "Competition and conflict. Playful rivalry." },
    TarotCard { id: "6_wands", name: "Six of Wands", arcana: Arcana::Wands, meaning: "Public success, victory, and recognition." },
    TarotCard { id: "7_wands", name: "Seven of Wands", arcana: Arcana::Wands, meaning: "Challenge and perseverance. Stand your ground." },
    TarotCard { id: "8_wands", name: "Eight of Wands", arcana: Arcana::Wands, meaning: "Speed, action, and quick news." },
    TarotCard { id: "9_wands", name: "Nine of Wands", arcana: Arcana::Wands, meaning: "Resilience and courage. You are almost there." },
    TarotCard { id: "10_wands", name: "Ten of Wands", arcana: Arcana::Wands, meaning: "Burden and responsibility. Don't work too hard." },
    TarotCard { id: "page_wands", name: "Page of Wands", arcana: Arcana::Wands, meaning: "Exploration and discovery. Be free-spirited." },
    TarotCard { id: "knight_wands", name: "Knight of Wands", arcana: Arcana::Wands, meaning: "Energy, passion, and impulsiveness. Go for it!" },
    TarotCard { id: "queen_wands", name: "Queen of Wands", arcana: Arcana::Wands, meaning: "Courage, confidence, and independence." },
    TarotCard { id: "king_wands", name: "King of Wands", arcana: Arcana::Wands, meaning: "Natural born leader, vision, and honor." },

    // Swords
    TarotCard { id: "ace_swords", name: "Ace of Swords", arcana: Arcana::Swords, meaning: "Breakthrough, clarity, and sharp mind." },
    TarotCard { id: "2_swords", name: "Two of Swords", arcana: Arcana::Swords, meaning: "Difficult choices and stalemate. Trust your gut." },
    TarotCard { id: "3_swords", name: "Three of Swords", arcana: Arcana::Swords, meaning: "Heartbreak or sorrow. Healing is necessary." },
    TarotCard { id: "4_swords", name: "Four of Swords", arcana: Arcana::Swords, meaning: "Rest, relaxation, and contemplation." },
    TarotCard { id: "5_swords", name: "Five of Swords", arcana: Arcana::Swords, meaning: "Conflict and tension. Pick your battles wisely." },
    TarotCard { id: "6_swords", name: "Six of Swords", arcana: Arcana::Swords, meaning: "Transition and moving to calmer waters." },
    TarotCard { id: "7_swords", name: "Seven of Swords", arcana: Arcana::Swords, meaning: "Strategy or deception. Be careful." },
    TarotCard { id: "8_swords", name: "Eight of Swords", arcana: Arcana::Swords, meaning: "Feeling trapped. The restrictions are self-imposed." },
    TarotCard { id: "9_swords", name: "Nine of Swords", arcana: Arcana::Swords, meaning: "Anxiety and worry. Things are better than they seem." },
    TarotCard { id: "10_swords", name: "Ten of Swords", arcana: Arcana::Swords, meaning: "End of a cycle. Only way is up from here." },
    TarotCard { id: "page_swords", name: "Page of Swords", arcana: Arcana::Swords, meaning: "Curiosity and new ideas. Speak the truth." },
    TarotCard { id: "knight_swords", name: "Knight of Swords", arcana: Arcana::Swords, meaning: "Action, speed, and ambition." },
    TarotCard { id: "queen_swords", name: "Queen of Swords", arcana: Arcana::Swords, meaning: "Perceptive and independent. Clear boundaries." },
    TarotCard { id: "king_swords", name: "King of Swords", arcana: Arcana::Swords, meaning: "Mental clarity and intellectual power." },

    // Pentacles
    TarotCard { id: "ace_pents", name: "Ace of Pentacles", arcana: Arcana::Pentacles, meaning: "A new financial or career opportunity. Abundance." },
    TarotCard { id: "2_pents", name: "Two of Pentacles", arcana: Arcana::Pentacles, meaning: "Balance and adaptability. Juggling priorities." },
    TarotCard { id: "3_pents", name: "Three of Pentacles", arcana: Arcana::Pentacles, meaning: "Teamwork and collaboration. Building together." },
    TarotCard { id: "4_pents", name: "Four of Pentacles", arcana: Arcana::Pentacles, meaning: "Security and conservation. Don't hold on too tight." },
    TarotCard { id: "5_pents", name: "Five of Pentacles", arcana: Arcana::Pentacles, meaning: "Hardship. Seek help, you are not alone." },
    TarotCard { id: "6_pents", name: "Six of Pentacles", arcana: Arcana::Pentacles, meaning: "Generosity and charity. Giving and receiving." },
    TarotCard { id: "7_pents", name: "Seven of Pentacles", arcana: Arcana::Pentacles, meaning: "Patience and long-term vision. Seeds are growing." },
    TarotCard { id: "8_pents", name: "Eight of Pentacles", arcana: Arcana::Pentacles, meaning: "Apprenticeship and mastery. Honing your skills." },
    TarotCard { id: "9_pents", name: "Nine of Pentacles", arcana: Arcana::Pentacles, meaning: "Luxury, self-sufficiency, and financial independence." },
    TarotCard { id: "10_pents", name: "Ten of Pentacles", arcana: Arcana::Pentacles, meaning: "Wealth, inheritance, and family legacy." },
    TarotCard { id: "page_pents", name: "Page of Pentacles", arcana: Arcana::Pentacles, meaning: "Ambition and diligence. A new study or goal." },
    TarotCard { id: "knight_pents", name: "Knight of Pentacles", arcana: Arcana::Pentacles, meaning: "Efficiency, routine, and reliability." },
    TarotCard { id: "queen_pents", name: "Queen of Pentacles", arcana: Arcana::Pentacles, meaning: "Practicality and creature comforts. Nurturing." },
    TarotCard { id: "king_pents", name: "King of Pentacles", arcana: Arcana::Pentacles, meaning: "Security, control, and power. Business success." },
];
