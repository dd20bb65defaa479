//! The bundled reading table: 365 days covering the whole Bible once,
//! read in three parallel streams (Genesis to 2 Chronicles, Ezra to
//! Malachi without the Psalms, and Matthew to Revelation followed by the
//! Psalms).

/// Number of days in the bundled plan.
pub const PLAN_DAYS: usize = 365;

/// Daily passage lists, one entry per plan day.
pub static PLAN_DATA: [&[&str]; PLAN_DAYS] = [
    &["Genesis 1", "Ezra 1", "Matthew 1"],
    &["Genesis 2", "Ezra 2", "Matthew 2"],
    &["Genesis 3", "Ezra 3", "Matthew 3"],
    &["Genesis 4", "Ezra 4", "Matthew 4"],
    &["Genesis 5", "Ezra 5", "Matthew 5"],
    &["Genesis 6", "Ezra 6", "Matthew 6"],
    &["Genesis 7", "Ezra 7", "Matthew 7"],
    &["Genesis 8", "Ezra 8", "Matthew 8"],
    &["Genesis 9", "Ezra 9", "Matthew 9", "Matthew 10"],
    &["Genesis 10", "Genesis 11", "Ezra 10", "Matthew 11"],
    &["Genesis 12", "Nehemiah 1", "Matthew 12"],
    &["Genesis 13", "Nehemiah 2", "Matthew 13"],
    &["Genesis 14", "Nehemiah 3", "Matthew 14"],
    &["Genesis 15", "Nehemiah 4", "Matthew 15"],
    &["Genesis 16", "Nehemiah 5", "Matthew 16"],
    &["Genesis 17", "Nehemiah 6", "Matthew 17"],
    &["Genesis 18", "Nehemiah 7", "Matthew 18", "Matthew 19"],
    &["Genesis 19", "Nehemiah 8", "Matthew 20"],
    &["Genesis 20", "Nehemiah 9", "Matthew 21"],
    &["Genesis 21", "Genesis 22", "Nehemiah 10", "Matthew 22"],
    &["Genesis 23", "Nehemiah 11", "Matthew 23"],
    &["Genesis 24", "Nehemiah 12", "Matthew 24"],
    &["Genesis 25", "Nehemiah 13", "Matthew 25"],
    &["Genesis 26", "Esther 1", "Matthew 26"],
    &["Genesis 27", "Esther 2", "Matthew 27", "Matthew 28"],
    &["Genesis 28", "Esther 3", "Mark 1"],
    &["Genesis 29", "Esther 4", "Mark 2"],
    &["Genesis 30", "Esther 5", "Mark 3"],
    &["Genesis 31", "Genesis 32", "Esther 6", "Mark 4"],
    &["Genesis 33", "Esther 7", "Mark 5"],
    &["Genesis 34", "Esther 8", "Mark 6"],
    &["Genesis 35", "Esther 9", "Mark 7"],
    &["Genesis 36", "Esther 10", "Mark 8", "Mark 9"],
    &["Genesis 37", "Job 1", "Job 2", "Mark 10"],
    &["Genesis 38", "Job 3", "Mark 11"],
    &["Genesis 39", "Job 4", "Mark 12"],
    &["Genesis 40", "Job 5", "Mark 13"],
    &["Genesis 41", "Job 6", "Mark 14"],
    &["Genesis 42", "Genesis 43", "Job 7", "Mark 15"],
    &["Genesis 44", "Job 8", "Mark 16"],
    &["Genesis 45", "Job 9", "Luke 1", "Luke 2"],
    &["Genesis 46", "Job 10", "Luke 3"],
    &["Genesis 47", "Job 11", "Luke 4"],
    &["Genesis 48", "Job 12", "Luke 5"],
    &["Genesis 49", "Job 13", "Luke 6"],
    &["Genesis 50", "Job 14", "Luke 7"],
    &["Exodus 1", "Job 15", "Luke 8"],
    &["Exodus 2", "Job 16", "Luke 9"],
    &["Exodus 3", "Exodus 4", "Job 17", "Luke 10", "Luke 11"],
    &["Exodus 5", "Job 18", "Luke 12"],
    &["Exodus 6", "Job 19", "Luke 13"],
    &["Exodus 7", "Job 20", "Luke 14"],
    &["Exodus 8", "Job 21", "Luke 15"],
    &["Exodus 9", "Job 22", "Luke 16"],
    &["Exodus 10", "Job 23", "Luke 17"],
    &["Exodus 11", "Job 24", "Luke 18"],
    &["Exodus 12", "Job 25", "Luke 19", "Luke 20"],
    &["Exodus 13", "Exodus 14", "Job 26", "Luke 21"],
    &["Exodus 15", "Job 27", "Luke 22"],
    &["Exodus 16", "Job 28", "Luke 23"],
    &["Exodus 17", "Job 29", "Luke 24"],
    &["Exodus 18", "Job 30", "John 1"],
    &["Exodus 19", "Job 31", "John 2"],
    &["Exodus 20", "Job 32", "John 3"],
    &["Exodus 21", "Job 33", "John 4", "John 5"],
    &["Exodus 22", "Job 34", "John 6"],
    &["Exodus 23", "Job 35", "Job 36", "John 7"],
    &["Exodus 24", "Exodus 25", "Job 37", "John 8"],
    &["Exodus 26", "Job 38", "John 9"],
    &["Exodus 27", "Job 39", "John 10"],
    &["Exodus 28", "Job 40", "John 11"],
    &["Exodus 29", "Job 41", "John 12"],
    &["Exodus 30", "Job 42", "John 13", "John 14"],
    &["Exodus 31", "Proverbs 1", "John 15"],
    &["Exodus 32", "Proverbs 2", "John 16"],
    &["Exodus 33", "Proverbs 3", "John 17"],
    &["Exodus 34", "Exodus 35", "Proverbs 4", "John 18"],
    &["Exodus 36", "Proverbs 5", "John 19"],
    &["Exodus 37", "Proverbs 6", "John 20"],
    &["Exodus 38", "Proverbs 7", "John 21"],
    &["Exodus 39", "Proverbs 8", "Acts 1"],
    &["Exodus 40", "Proverbs 9", "Acts 2", "Acts 3"],
    &["Leviticus 1", "Proverbs 10", "Acts 4"],
    &["Leviticus 2", "Proverbs 11", "Acts 5"],
    &["Leviticus 3", "Proverbs 12", "Acts 6"],
    &["Leviticus 4", "Proverbs 13", "Acts 7"],
    &["Leviticus 5", "Leviticus 6", "Proverbs 14", "Acts 8"],
    &["Leviticus 7", "Proverbs 15", "Acts 9"],
    &["Leviticus 8", "Proverbs 16", "Acts 10"],
    &["Leviticus 9", "Proverbs 17", "Acts 11", "Acts 12"],
    &["Leviticus 10", "Proverbs 18", "Acts 13"],
    &["Leviticus 11", "Proverbs 19", "Acts 14"],
    &["Leviticus 12", "Proverbs 20", "Acts 15"],
    &["Leviticus 13", "Proverbs 21", "Acts 16"],
    &["Leviticus 14", "Proverbs 22", "Acts 17"],
    &["Leviticus 15", "Proverbs 23", "Acts 18"],
    &["Leviticus 16", "Leviticus 17", "Proverbs 24", "Acts 19"],
    &["Leviticus 18", "Proverbs 25", "Acts 20", "Acts 21"],
    &["Leviticus 19", "Proverbs 26", "Acts 22"],
    &["Leviticus 20", "Proverbs 27", "Proverbs 28", "Acts 23"],
    &["Leviticus 21", "Proverbs 29", "Acts 24"],
    &["Leviticus 22", "Proverbs 30", "Acts 25"],
    &["Leviticus 23", "Proverbs 31", "Acts 26"],
    &["Leviticus 24", "Ecclesiastes 1", "Acts 27"],
    &["Leviticus 25", "Ecclesiastes 2", "Acts 28"],
    &["Leviticus 26", "Leviticus 27", "Ecclesiastes 3", "Romans 1", "Romans 2"],
    &["Numbers 1", "Ecclesiastes 4", "Romans 3"],
    &["Numbers 2", "Ecclesiastes 5", "Romans 4"],
    &["Numbers 3", "Ecclesiastes 6", "Romans 5"],
    &["Numbers 4", "Ecclesiastes 7", "Romans 6"],
    &["Numbers 5", "Ecclesiastes 8", "Romans 7"],
    &["Numbers 6", "Ecclesiastes 9", "Romans 8"],
    &["Numbers 7", "Ecclesiastes 10", "Romans 9"],
    &["Numbers 8", "Ecclesiastes 11", "Romans 10", "Romans 11"],
    &["Numbers 9", "Ecclesiastes 12", "Romans 12"],
    &["Numbers 10", "Numbers 11", "Song of Solomon 1", "Romans 13"],
    &["Numbers 12", "Song of Solomon 2", "Romans 14"],
    &["Numbers 13", "Song of Solomon 3", "Romans 15"],
    &["Numbers 14", "Song of Solomon 4", "Romans 16"],
    &["Numbers 15", "Song of Solomon 5", "1 Corinthians 1"],
    &["Numbers 16", "Song of Solomon 6", "1 Corinthians 2"],
    &["Numbers 17", "Song of Solomon 7", "1 Corinthians 3", "1 Corinthians 4"],
    &["Numbers 18", "Song of Solomon 8", "1 Corinthians 5"],
    &["Numbers 19", "Isaiah 1", "1 Corinthians 6"],
    &["Numbers 20", "Numbers 21", "Isaiah 2", "1 Corinthians 7"],
    &["Numbers 22", "Isaiah 3", "1 Corinthians 8"],
    &["Numbers 23", "Isaiah 4", "1 Corinthians 9"],
    &["Numbers 24", "Isaiah 5", "1 Corinthians 10"],
    &["Numbers 25", "Isaiah 6", "1 Corinthians 11"],
    &["Numbers 26", "Isaiah 7", "1 Corinthians 12", "1 Corinthians 13"],
    &["Numbers 27", "Isaiah 8", "1 Corinthians 14"],
    &["Numbers 28", "Isaiah 9", "1 Corinthians 15"],
    &["Numbers 29", "Isaiah 10", "Isaiah 11", "1 Corinthians 16"],
    &["Numbers 30", "Isaiah 12", "2 Corinthians 1"],
    &["Numbers 31", "Numbers 32", "Isaiah 13", "2 Corinthians 2"],
    &["Numbers 33", "Isaiah 14", "2 Corinthians 3"],
    &["Numbers 34", "Isaiah 15", "2 Corinthians 4"],
    &["Numbers 35", "Isaiah 16", "2 Corinthians 5", "2 Corinthians 6"],
    &["Numbers 36", "Isaiah 17", "2 Corinthians 7"],
    &["Deuteronomy 1", "Isaiah 18", "2 Corinthians 8"],
    &["Deuteronomy 2", "Isaiah 19", "2 Corinthians 9"],
    &["Deuteronomy 3", "Isaiah 20", "2 Corinthians 10"],
    &["Deuteronomy 4", "Isaiah 21", "2 Corinthians 11"],
    &["Deuteronomy 5", "Isaiah 22", "2 Corinthians 12"],
    &["Deuteronomy 6", "Deuteronomy 7", "Isaiah 23", "2 Corinthians 13"],
    &["Deuteronomy 8", "Isaiah 24", "Galatians 1", "Galatians 2"],
    &["Deuteronomy 9", "Isaiah 25", "Galatians 3"],
    &["Deuteronomy 10", "Isaiah 26", "Galatians 4"],
    &["Deuteronomy 11", "Isaiah 27", "Galatians 5"],
    &["Deuteronomy 12", "Isaiah 28", "Galatians 6"],
    &["Deuteronomy 13", "Isaiah 29", "Ephesians 1"],
    &["Deuteronomy 14", "Isaiah 30", "Ephesians 2"],
    &["Deuteronomy 15", "Isaiah 31", "Ephesians 3"],
    &["Deuteronomy 16", "Deuteronomy 17", "Isaiah 32", "Ephesians 4"],
    &["Deuteronomy 18", "Isaiah 33", "Ephesians 5", "Ephesians 6"],
    &["Deuteronomy 19", "Isaiah 34", "Philippians 1"],
    &["Deuteronomy 20", "Isaiah 35", "Philippians 2"],
    &["Deuteronomy 21", "Isaiah 36", "Philippians 3"],
    &["Deuteronomy 22", "Isaiah 37", "Philippians 4"],
    &["Deuteronomy 23", "Isaiah 38", "Colossians 1"],
    &["Deuteronomy 24", "Isaiah 39", "Colossians 2"],
    &["Deuteronomy 25", "Isaiah 40", "Colossians 3"],
    &["Deuteronomy 26", "Isaiah 41", "Colossians 4", "1 Thessalonians 1"],
    &["Deuteronomy 27", "Deuteronomy 28", "Isaiah 42", "1 Thessalonians 2"],
    &["Deuteronomy 29", "Isaiah 43", "1 Thessalonians 3"],
    &["Deuteronomy 30", "Isaiah 44", "Isaiah 45", "1 Thessalonians 4"],
    &["Deuteronomy 31", "Isaiah 46", "1 Thessalonians 5"],
    &["Deuteronomy 32", "Isaiah 47", "2 Thessalonians 1"],
    &["Deuteronomy 33", "Isaiah 48", "2 Thessalonians 2"],
    &["Deuteronomy 34", "Isaiah 49", "2 Thessalonians 3"],
    &["Joshua 1", "Isaiah 50", "1 Timothy 1", "1 Timothy 2"],
    &["Joshua 2", "Isaiah 51", "1 Timothy 3"],
    &["Joshua 3", "Joshua 4", "Isaiah 52", "1 Timothy 4"],
    &["Joshua 5", "Isaiah 53", "1 Timothy 5"],
    &["Joshua 6", "Isaiah 54", "1 Timothy 6"],
    &["Joshua 7", "Isaiah 55", "2 Timothy 1"],
    &["Joshua 8", "Isaiah 56", "2 Timothy 2"],
    &["Joshua 9", "Isaiah 57", "2 Timothy 3"],
    &["Joshua 10", "Isaiah 58", "2 Timothy 4", "Titus 1"],
    &["Joshua 11", "Isaiah 59", "Titus 2"],
    &["Joshua 12", "Isaiah 60", "Titus 3"],
    &["Joshua 13", "Isaiah 61", "Philemon"],
    &["Joshua 14", "Joshua 15", "Isaiah 62", "Hebrews 1"],
    &["Joshua 16", "Isaiah 63", "Hebrews 2"],
    &["Joshua 17", "Isaiah 64", "Hebrews 3"],
    &["Joshua 18", "Isaiah 65", "Hebrews 4"],
    &["Joshua 19", "Isaiah 66", "Hebrews 5", "Hebrews 6"],
    &["Joshua 20", "Jeremiah 1", "Hebrews 7"],
    &["Joshua 21", "Jeremiah 2", "Hebrews 8"],
    &["Joshua 22", "Jeremiah 3", "Hebrews 9"],
    &["Joshua 23", "Jeremiah 4", "Hebrews 10"],
    &["Joshua 24", "Jeremiah 5", "Hebrews 11"],
    &["Judges 1", "Judges 2", "Jeremiah 6", "Hebrews 12"],
    &["Judges 3", "Jeremiah 7", "Hebrews 13"],
    &["Judges 4", "Jeremiah 8", "James 1", "James 2"],
    &["Judges 5", "Jeremiah 9", "James 3"],
    &["Judges 6", "Jeremiah 10", "James 4"],
    &["Judges 7", "Jeremiah 11", "James 5"],
    &["Judges 8", "Jeremiah 12", "1 Peter 1"],
    &["Judges 9", "Jeremiah 13", "Jeremiah 14", "1 Peter 2"],
    &["Judges 10", "Jeremiah 15", "1 Peter 3"],
    &["Judges 11", "Judges 12", "Jeremiah 16", "1 Peter 4"],
    &["Judges 13", "Jeremiah 17", "1 Peter 5", "2 Peter 1"],
    &["Judges 14", "Jeremiah 18", "2 Peter 2"],
    &["Judges 15", "Jeremiah 19", "2 Peter 3"],
    &["Judges 16", "Jeremiah 20", "1 John 1"],
    &["Judges 17", "Jeremiah 21", "1 John 2"],
    &["Judges 18", "Jeremiah 22", "1 John 3"],
    &["Judges 19", "Jeremiah 23", "1 John 4"],
    &["Judges 20", "Jeremiah 24", "1 John 5"],
    &["Judges 21", "Jeremiah 25", "2 John", "3 John"],
    &["Ruth 1", "Ruth 2", "Jeremiah 26", "Jude"],
    &["Ruth 3", "Jeremiah 27", "Revelation 1"],
    &["Ruth 4", "Jeremiah 28", "Revelation 2"],
    &["1 Samuel 1", "Jeremiah 29", "Revelation 3"],
    &["1 Samuel 2", "Jeremiah 30", "Revelation 4"],
    &["1 Samuel 3", "Jeremiah 31", "Revelation 5"],
    &["1 Samuel 4", "Jeremiah 32", "Revelation 6"],
    &["1 Samuel 5", "Jeremiah 33", "Revelation 7", "Revelation 8"],
    &["1 Samuel 6", "Jeremiah 34", "Revelation 9"],
    &["1 Samuel 7", "1 Samuel 8", "Jeremiah 35", "Revelation 10"],
    &["1 Samuel 9", "Jeremiah 36", "Revelation 11"],
    &["1 Samuel 10", "Jeremiah 37", "Revelation 12"],
    &["1 Samuel 11", "Jeremiah 38", "Revelation 13"],
    &["1 Samuel 12", "Jeremiah 39", "Revelation 14"],
    &["1 Samuel 13", "Jeremiah 40", "Revelation 15"],
    &["1 Samuel 14", "Jeremiah 41", "Revelation 16"],
    &["1 Samuel 15", "Jeremiah 42", "Revelation 17", "Revelation 18"],
    &["1 Samuel 16", "Jeremiah 43", "Revelation 19"],
    &["1 Samuel 17", "Jeremiah 44", "Revelation 20"],
    &["1 Samuel 18", "1 Samuel 19", "Jeremiah 45", "Revelation 21"],
    &["1 Samuel 20", "Jeremiah 46", "Revelation 22"],
    &["1 Samuel 21", "Jeremiah 47", "Jeremiah 48", "Psalms 1"],
    &["1 Samuel 22", "Jeremiah 49", "Psalms 2"],
    &["1 Samuel 23", "Jeremiah 50", "Psalms 3"],
    &["1 Samuel 24", "Jeremiah 51", "Psalms 4", "Psalms 5"],
    &["1 Samuel 25", "Jeremiah 52", "Psalms 6"],
    &["1 Samuel 26", "Lamentations 1", "Psalms 7"],
    &["1 Samuel 27", "Lamentations 2", "Psalms 8"],
    &["1 Samuel 28", "Lamentations 3", "Psalms 9"],
    &["1 Samuel 29", "1 Samuel 30", "Lamentations 4", "Psalms 10"],
    &["1 Samuel 31", "Lamentations 5", "Psalms 11"],
    &["2 Samuel 1", "Ezekiel 1", "Psalms 12"],
    &["2 Samuel 2", "Ezekiel 2", "Psalms 13", "Psalms 14"],
    &["2 Samuel 3", "Ezekiel 3", "Psalms 15"],
    &["2 Samuel 4", "Ezekiel 4", "Psalms 16"],
    &["2 Samuel 5", "Ezekiel 5", "Psalms 17"],
    &["2 Samuel 6", "Ezekiel 6", "Psalms 18"],
    &["2 Samuel 7", "Ezekiel 7", "Psalms 19"],
    &["2 Samuel 8", "2 Samuel 9", "Ezekiel 8", "Psalms 20"],
    &["2 Samuel 10", "Ezekiel 9", "Psalms 21"],
    &["2 Samuel 11", "Ezekiel 10", "Psalms 22", "Psalms 23"],
    &["2 Samuel 12", "Ezekiel 11", "Psalms 24"],
    &["2 Samuel 13", "Ezekiel 12", "Psalms 25"],
    &["2 Samuel 14", "Ezekiel 13", "Psalms 26"],
    &["2 Samuel 15", "Ezekiel 14", "Psalms 27"],
    &["2 Samuel 16", "Ezekiel 15", "Psalms 28"],
    &["2 Samuel 17", "Ezekiel 16", "Psalms 29"],
    &["2 Samuel 18", "Ezekiel 17", "Psalms 30"],
    &["2 Samuel 19", "2 Samuel 20", "Ezekiel 18", "Psalms 31", "Psalms 32"],
    &["2 Samuel 21", "Ezekiel 19", "Psalms 33"],
    &["2 Samuel 22", "Ezekiel 20", "Psalms 34"],
    &["2 Samuel 23", "Ezekiel 21", "Psalms 35"],
    &["2 Samuel 24", "Ezekiel 22", "Psalms 36"],
    &["1 Kings 1", "Ezekiel 23", "Psalms 37"],
    &["1 Kings 2", "Ezekiel 24", "Ezekiel 25", "Psalms 38"],
    &["1 Kings 3", "Ezekiel 26", "Psalms 39"],
    &["1 Kings 4", "Ezekiel 27", "Psalms 40", "Psalms 41"],
    &["1 Kings 5", "1 Kings 6", "Ezekiel 28", "Psalms 42"],
    &["1 Kings 7", "Ezekiel 29", "Psalms 43"],
    &["1 Kings 8", "Ezekiel 30", "Psalms 44"],
    &["1 Kings 9", "Ezekiel 31", "Psalms 45"],
    &["1 Kings 10", "Ezekiel 32", "Psalms 46"],
    &["1 Kings 11", "Ezekiel 33", "Psalms 47"],
    &["1 Kings 12", "Ezekiel 34", "Psalms 48"],
    &["1 Kings 13", "Ezekiel 35", "Psalms 49", "Psalms 50"],
    &["1 Kings 14", "Ezekiel 36", "Psalms 51"],
    &["1 Kings 15", "Ezekiel 37", "Psalms 52"],
    &["1 Kings 16", "1 Kings 17", "Ezekiel 38", "Psalms 53"],
    &["1 Kings 18", "Ezekiel 39", "Psalms 54"],
    &["1 Kings 19", "Ezekiel 40", "Psalms 55"],
    &["1 Kings 20", "Ezekiel 41", "Psalms 56"],
    &["1 Kings 21", "Ezekiel 42", "Psalms 57"],
    &["1 Kings 22", "Ezekiel 43", "Psalms 58", "Psalms 59"],
    &["2 Kings 1", "Ezekiel 44", "Psalms 60"],
    &["2 Kings 2", "Ezekiel 45", "Psalms 61"],
    &["2 Kings 3", "Ezekiel 46", "Psalms 62"],
    &["2 Kings 4", "Ezekiel 47", "Psalms 63"],
    &["2 Kings 5", "2 Kings 6", "Ezekiel 48", "Psalms 64"],
    &["2 Kings 7", "Daniel 1", "Psalms 65"],
    &["2 Kings 8", "Daniel 2", "Psalms 66"],
    &["2 Kings 9", "Daniel 3", "Psalms 67", "Psalms 68"],
    &["2 Kings 10", "Daniel 4", "Psalms 69"],
    &["2 Kings 11", "Daniel 5", "Psalms 70"],
    &["2 Kings 12", "Daniel 6", "Psalms 71"],
    &["2 Kings 13", "Daniel 7", "Psalms 72"],
    &["2 Kings 14", "Daniel 8", "Psalms 73"],
    &["2 Kings 15", "2 Kings 16", "Daniel 9", "Psalms 74"],
    &["2 Kings 17", "Daniel 10", "Daniel 11", "Psalms 75"],
    &["2 Kings 18", "Daniel 12", "Psalms 76"],
    &["2 Kings 19", "Hosea 1", "Psalms 77", "Psalms 78"],
    &["2 Kings 20", "Hosea 2", "Psalms 79"],
    &["2 Kings 21", "Hosea 3", "Psalms 80"],
    &["2 Kings 22", "Hosea 4", "Psalms 81"],
    &["2 Kings 23", "Hosea 5", "Psalms 82"],
    &["2 Kings 24", "Hosea 6", "Psalms 83"],
    &["2 Kings 25", "Hosea 7", "Psalms 84"],
    &["1 Chronicles 1", "1 Chronicles 2", "Hosea 8", "Psalms 85"],
    &["1 Chronicles 3", "Hosea 9", "Psalms 86", "Psalms 87"],
    &["1 Chronicles 4", "Hosea 10", "Psalms 88"],
    &["1 Chronicles 5", "Hosea 11", "Psalms 89"],
    &["1 Chronicles 6", "Hosea 12", "Psalms 90"],
    &["1 Chronicles 7", "Hosea 13", "Psalms 91"],
    &["1 Chronicles 8", "Hosea 14", "Psalms 92"],
    &["1 Chronicles 9", "Joel 1", "Psalms 93"],
    &["1 Chronicles 10", "Joel 2", "Psalms 94"],
    &["1 Chronicles 11", "1 Chronicles 12", "Joel 3", "Psalms 95", "Psalms 96"],
    &["1 Chronicles 13", "Amos 1", "Psalms 97"],
    &["1 Chronicles 14", "Amos 2", "Psalms 98"],
    &["1 Chronicles 15", "Amos 3", "Psalms 99"],
    &["1 Chronicles 16", "Amos 4", "Psalms 100"],
    &["1 Chronicles 17", "Amos 5", "Psalms 101"],
    &["1 Chronicles 18", "Amos 6", "Psalms 102"],
    &["1 Chronicles 19", "Amos 7", "Psalms 103"],
    &["1 Chronicles 20", "Amos 8", "Psalms 104", "Psalms 105"],
    &["1 Chronicles 21", "Amos 9", "Psalms 106"],
    &["1 Chronicles 22", "1 Chronicles 23", "Obadiah", "Psalms 107"],
    &["1 Chronicles 24", "Jonah 1", "Psalms 108"],
    &["1 Chronicles 25", "Jonah 2", "Psalms 109"],
    &["1 Chronicles 26", "Jonah 3", "Psalms 110"],
    &["1 Chronicles 27", "Jonah 4", "Psalms 111"],
    &["1 Chronicles 28", "Micah 1", "Micah 2", "Psalms 112"],
    &["1 Chronicles 29", "Micah 3", "Psalms 113", "Psalms 114"],
    &["2 Chronicles 1", "Micah 4", "Psalms 115"],
    &["2 Chronicles 2", "Micah 5", "Psalms 116"],
    &["2 Chronicles 3", "Micah 6", "Psalms 117"],
    &["2 Chronicles 4", "2 Chronicles 5", "Micah 7", "Psalms 118"],
    &["2 Chronicles 6", "Nahum 1", "Psalms 119"],
    &["2 Chronicles 7", "Nahum 2", "Psalms 120"],
    &["2 Chronicles 8", "Nahum 3", "Psalms 121"],
    &["2 Chronicles 9", "Habakkuk 1", "Psalms 122", "Psalms 123"],
    &["2 Chronicles 10", "Habakkuk 2", "Psalms 124"],
    &["2 Chronicles 11", "Habakkuk 3", "Psalms 125"],
    &["2 Chronicles 12", "Zephaniah 1", "Psalms 126"],
    &["2 Chronicles 13", "Zephaniah 2", "Psalms 127"],
    &["2 Chronicles 14", "2 Chronicles 15", "Zephaniah 3", "Psalms 128"],
    &["2 Chronicles 16", "Haggai 1", "Psalms 129"],
    &["2 Chronicles 17", "Haggai 2", "Psalms 130"],
    &["2 Chronicles 18", "Zechariah 1", "Psalms 131", "Psalms 132"],
    &["2 Chronicles 19", "Zechariah 2", "Psalms 133"],
    &["2 Chronicles 20", "Zechariah 3", "Psalms 134"],
    &["2 Chronicles 21", "Zechariah 4", "Psalms 135"],
    &["2 Chronicles 22", "Zechariah 5", "Psalms 136"],
    &["2 Chronicles 23", "Zechariah 6", "Psalms 137"],
    &["2 Chronicles 24", "Zechariah 7", "Psalms 138"],
    &["2 Chronicles 25", "2 Chronicles 26", "Zechariah 8", "Psalms 139"],
    &["2 Chronicles 27", "Zechariah 9", "Psalms 140", "Psalms 141"],
    &["2 Chronicles 28", "Zechariah 10", "Psalms 142"],
    &["2 Chronicles 29", "Zechariah 11", "Psalms 143"],
    &["2 Chronicles 30", "Zechariah 12", "Psalms 144"],
    &["2 Chronicles 31", "Zechariah 13", "Psalms 145"],
    &["2 Chronicles 32", "Zechariah 14", "Psalms 146"],
    &["2 Chronicles 33", "Malachi 1", "Psalms 147"],
    &["2 Chronicles 34", "Malachi 2", "Psalms 148"],
    &["2 Chronicles 35", "2 Chronicles 36", "Malachi 3", "Malachi 4", "Psalms 149", "Psalms 150"],
];
