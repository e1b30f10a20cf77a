//! Built-in word list.
//!
//! No two entries are anagrams of each other and every entry has at least
//! two distinct letters.

pub const DEFAULT_WORDS: &[&str] = &[
    "animal", "auto", "anecdote", "alphabet", "all", "awesome", "balloon", "basket", "bench",
    "best", "birthday", "book", "briefcase", "camera", "camping", "candle", "cat", "cauliflower",
    "chat", "children", "class", "classic", "classroom", "coffee", "colorful", "cookie",
    "creative", "cruise", "dance", "daytime", "dinosaur", "doorknob", "dine", "dream", "dusk",
    "eating", "elephant", "emerald", "eerie", "electric", "finish", "flowers", "follow", "fox",
    "frame", "free", "frequent", "funnel", "green", "guitar", "grocery", "glass", "great",
    "giggle", "haircut", "half", "homemade", "happen", "honey", "hurry", "hundred", "ice",
    "igloo", "invest", "invite", "icon", "introduce", "joke", "jovial", "journal", "jump", "join",
    "kangaroo", "keyboard", "kitchen", "koala", "kind", "kaleidoscope", "landscape", "late",
    "laugh", "learning", "lemon", "letter", "lily", "magazine", "marine", "marshmallow", "maze",
    "meditate", "melody", "minute", "monument", "moon", "motorcycle", "mountain", "music",
    "north", "nose", "night", "name", "never", "negotiate", "number", "opposite", "octopus", "oak",
    "order", "open", "polar", "pack", "painting", "person", "picnic", "pillow", "pizza",
    "podcast", "presentation", "puppy", "puzzle", "recipe", "release", "restaurant",
    "revolution", "rainbow", "raccoon", "shelf", "surprise", "sunset", "sunflower", "sunrise",
    "swim", "school", "scarf", "tomato", "turtle", "travel", "tree", "trombone", "tulip",
    "umbrella", "unicorn", "vacation", "violin", "wall", "water", "whale", "window", "xylophone",
    "yellow", "zebra", "zero",
];
