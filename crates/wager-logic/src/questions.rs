//! Trivia question bank
//!
//! Every answer is an integer so it can be compared against guesses exactly.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub unit: Option<&'static str>,
    pub answer: i64,
}

pub static QUESTIONS: &[Question] = &[
    Question { id: "q1", prompt: "How many seconds are there in a day?", unit: Some("seconds"), answer: 86400 },
    Question { id: "q2", prompt: "In what year was the first iPhone released?", unit: Some("year"), answer: 2007 },
    Question { id: "q3", prompt: "What is the height of Mount Everest in meters?", unit: Some("meters"), answer: 8848 },
    Question { id: "q4", prompt: "How many bones are in the adult human body?", unit: Some("bones"), answer: 206 },
    Question { id: "q5", prompt: "What is the population of Iceland (approx, in 2023)?", unit: Some("people"), answer: 387000 },
    Question { id: "q6", prompt: "How many minutes does light take to travel from the Sun to Earth?", unit: Some("minutes"), answer: 8 },
    Question { id: "q7", prompt: "How many US states border the Pacific Ocean?", unit: Some("states"), answer: 5 },
    Question { id: "q8", prompt: "What is the boiling point of water in Celsius at sea level?", unit: Some("°C"), answer: 100 },
    Question { id: "q9", prompt: "How many keys are on a standard modern piano?", unit: Some("keys"), answer: 88 },
    Question { id: "q10", prompt: "What is the diameter of Earth in kilometers (approx)?", unit: Some("km"), answer: 12742 },
    Question { id: "q11", prompt: "How many minutes are in a week?", unit: Some("minutes"), answer: 10080 },
    Question { id: "q12", prompt: "How many planets are in the Solar System?", unit: Some("planets"), answer: 8 },
    Question { id: "q13", prompt: "How many bones are in the human spine (approx)?", unit: Some("bones"), answer: 33 },
    Question { id: "q14", prompt: "How many elements are on the periodic table (currently)?", unit: Some("elements"), answer: 118 },
    Question { id: "q15", prompt: "How many players are on the field for one soccer team?", unit: Some("players"), answer: 11 },
    Question { id: "q16", prompt: "How many players are on the court for one basketball team?", unit: Some("players"), answer: 5 },
    Question { id: "q17", prompt: "How many squares are on a chessboard?", unit: Some("squares"), answer: 64 },
    Question { id: "q18", prompt: "In what year did Apollo 11 land on the Moon?", unit: Some("year"), answer: 1969 },
    Question { id: "q19", prompt: "How many strings does a standard guitar have?", unit: Some("strings"), answer: 6 },
    Question { id: "q20", prompt: "How many cards are in a standard deck (no jokers)?", unit: Some("cards"), answer: 52 },
    Question { id: "q21", prompt: "How many hours are in a leap year?", unit: Some("hours"), answer: 8784 },
    Question { id: "q22", prompt: "What is the freezing point of water in Celsius?", unit: Some("°C"), answer: 0 },
    Question { id: "q23", prompt: "How many centimeters are in a meter?", unit: Some("cm"), answer: 100 },
    Question { id: "q24", prompt: "How many millimeters are in an inch?", unit: Some("mm"), answer: 25 },
    Question { id: "q25", prompt: "How many US Senators are there total?", unit: Some("senators"), answer: 100 },
    Question { id: "q26", prompt: "How many stripes are on the US flag?", unit: Some("stripes"), answer: 13 },
    Question { id: "q27", prompt: "How many stars are on the US flag?", unit: Some("stars"), answer: 50 },
    Question { id: "q28", prompt: "How many days does it take for Earth to orbit the Sun (approx)?", unit: Some("days"), answer: 365 },
    Question { id: "q29", prompt: "How many minutes are in a day?", unit: Some("minutes"), answer: 1440 },
    Question { id: "q30", prompt: "How many seconds are in an hour?", unit: Some("seconds"), answer: 3600 },
    Question { id: "q31", prompt: "What is the speed of sound in air at sea level (approx) in m/s?", unit: Some("m/s"), answer: 343 },
    Question { id: "q32", prompt: "How far is the Moon from Earth (average) in kilometers?", unit: Some("km"), answer: 384400 },
    Question { id: "q33", prompt: "How many moons does Mars have?", unit: Some("moons"), answer: 2 },
    Question { id: "q34", prompt: "How many teeth does an adult human typically have?", unit: Some("teeth"), answer: 32 },
    Question { id: "q35", prompt: "How many bytes are in a kilobyte (computer science, base-2)?", unit: Some("bytes"), answer: 1024 },
    Question { id: "q36", prompt: "How many bits are in a byte?", unit: Some("bits"), answer: 8 },
    Question { id: "q37", prompt: "How many degrees are in a circle?", unit: Some("degrees"), answer: 360 },
    Question { id: "q38", prompt: "How many points is a touchdown worth (NFL, excluding extra points)?", unit: Some("points"), answer: 6 },
    Question { id: "q39", prompt: "How many yards is a football field (goal line to goal line)?", unit: Some("yards"), answer: 100 },
    Question { id: "q40", prompt: "How long is an Olympic swimming pool?", unit: Some("meters"), answer: 50 },
    Question { id: "q41", prompt: "In what year did World War II end?", unit: Some("year"), answer: 1945 },
    Question { id: "q42", prompt: "In what year did the Titanic sink?", unit: Some("year"), answer: 1912 },
    Question { id: "q43", prompt: "How many liters are in a US gallon (approx)?", unit: Some("liters"), answer: 4 },
    Question { id: "q44", prompt: "How many centimeters are in an inch (approx)?", unit: Some("cm"), answer: 3 },
    Question { id: "q45", prompt: "How many minutes is a standard NHL period?", unit: Some("minutes"), answer: 20 },
    Question { id: "q46", prompt: "How many innings are in a standard MLB baseball game?", unit: Some("innings"), answer: 9 },
    Question { id: "q47", prompt: "How many holes are in a standard round of golf?", unit: Some("holes"), answer: 18 },
    Question { id: "q48", prompt: "How many grams are in a kilogram?", unit: Some("grams"), answer: 1000 },
    Question { id: "q49", prompt: "How many meters are in a kilometer?", unit: Some("meters"), answer: 1000 },
    Question { id: "q50", prompt: "How many seconds are in a minute?", unit: Some("seconds"), answer: 60 },
    Question { id: "q51", prompt: "What is the radius of Earth in kilometers (approx)?", unit: Some("km"), answer: 6371 },
    Question { id: "q52", prompt: "What is the length of the Amazon River in kilometers (approx)?", unit: Some("km"), answer: 6400 },
    Question { id: "q53", prompt: "How many bones are in a human hand (including wrist/carpals)?", unit: Some("bones"), answer: 27 },
    Question { id: "q54", prompt: "How many sides does a hexagon have?", unit: Some("sides"), answer: 6 },
    Question { id: "q55", prompt: "How many countries are in the European Union (as of 2025)?", unit: Some("countries"), answer: 27 },
    Question { id: "q56", prompt: "How many countries are there in the world (UN members)?", unit: Some("countries"), answer: 193 },
    Question { id: "q57", prompt: "How many piano keys are white keys?", unit: Some("keys"), answer: 52 },
    Question { id: "q58", prompt: "How many continents are there?", unit: Some("continents"), answer: 7 },
    Question { id: "q59", prompt: "How many dots are on a standard pair of dice (sum of pips)?", unit: Some("dots"), answer: 42 },
    Question { id: "q60", prompt: "How many degrees Celsius is normal human body temperature (approx)?", unit: Some("°C"), answer: 37 },
    Question { id: "q61", prompt: "How many colors are there in a rainbow?", unit: Some("colors"), answer: 7 },
    Question { id: "q62", prompt: "How many hearts does an octopus have?", unit: Some("hearts"), answer: 3 },
    Question { id: "q63", prompt: "How many time zones are there in Russia?", unit: Some("time zones"), answer: 11 },
    Question { id: "q64", prompt: "How many squares are there on a Rubik's Cube (one face)?", unit: Some("squares"), answer: 9 },
    Question { id: "q65", prompt: "How many Olympic rings are there?", unit: Some("rings"), answer: 5 },
];

/// Look up a question in the bank by id.
pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}
