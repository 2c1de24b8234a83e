//! Built-in public-domain anthology used when no poems directory is set.

use super::Poem;

const ANTHOLOGY: &[(&str, &str, &str)] = &[
    (
        "\u{201c}Hope\u{201d} is the thing with feathers",
        "Emily Dickinson",
        "\u{201c}Hope\u{201d} is the thing with feathers -\n\
         That perches in the soul -\n\
         And sings the tune without the words -\n\
         And never stops - at all -\n\
         \n\
         And sweetest - in the Gale - is heard -\n\
         And sore must be the storm -\n\
         That could abash the little Bird\n\
         That kept so many warm -\n\
         \n\
         I've heard it in the chillest land -\n\
         And on the strangest Sea -\n\
         Yet - never - in Extremity,\n\
         It asked a crumb - of me.",
    ),
    (
        "Who Has Seen the Wind?",
        "Christina Rossetti",
        "Who has seen the wind?\n\
         Neither I nor you:\n\
         But when the leaves hang trembling,\n\
         The wind is passing through.\n\
         \n\
         Who has seen the wind?\n\
         Neither you nor I:\n\
         But when the trees bow down their heads,\n\
         The wind is passing by.",
    ),
    (
        "Ah! Sun-flower",
        "William Blake",
        "Ah Sun-flower! weary of time,\n\
         Who countest the steps of the Sun:\n\
         Seeking after that sweet golden clime\n\
         Where the travellers journey is done.\n\
         \n\
         Where the Youth pined away with desire,\n\
         And the pale Virgin shrouded in snow:\n\
         Arise from their graves and aspire,\n\
         Where my Sun-flower wishes to go.",
    ),
    (
        "Sonnet 18",
        "William Shakespeare",
        "Shall I compare thee to a summer's day?\n\
         Thou art more lovely and more temperate:\n\
         Rough winds do shake the darling buds of May,\n\
         And summer's lease hath all too short a date;\n\
         Sometime too hot the eye of heaven shines,\n\
         And often is his gold complexion dimm'd;\n\
         And every fair from fair sometime declines,\n\
         By chance or nature's changing course untrimm'd;\n\
         But thy eternal summer shall not fade,\n\
         Nor lose possession of that fair thou ow'st;\n\
         Nor shall death brag thou wander'st in his shade,\n\
         When in eternal lines to time thou grow'st:\n\
         So long as men can breathe or eyes can see,\n\
         So long lives this, and this gives life to thee.",
    ),
    (
        "The Lake Isle of Innisfree",
        "W. B. Yeats",
        "I will arise and go now, and go to Innisfree,\n\
         And a small cabin build there, of clay and wattles made;\n\
         Nine bean-rows will I have there, a hive for the honey-bee,\n\
         And live alone in the bee-loud glade.\n\
         \n\
         And I shall have some peace there, for peace comes dropping slow,\n\
         Dropping from the veils of the morning to where the cricket sings;\n\
         There midnight's all a glimmer, and noon a purple glow,\n\
         And evening full of the linnet's wings.\n\
         \n\
         I will arise and go now, for always night and day\n\
         I hear lake water lapping with low sounds by the shore;\n\
         While I stand on the roadway, or on the pavements grey,\n\
         I hear it in the deep heart's core.",
    ),
    (
        "A word is dead",
        "Emily Dickinson",
        "A word is dead\n\
         When it is said,\n\
         Some say.\n\
         I say it just\n\
         Begins to live\n\
         That day.",
    ),
];

pub fn poems() -> Vec<Poem> {
    ANTHOLOGY
        .iter()
        .map(|(title, author, body)| Poem {
            title: (*title).to_string(),
            author: Some((*author).to_string()),
            lines: body.lines().map(str::to_string).collect(),
        })
        .collect()
}
