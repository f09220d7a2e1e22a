// [libs/core/dictionary/src/table.rs]
//! The 256-entry vocabulary (§3 "DictionaryEntry"). Index 0 is the sentinel
//! `NIL` (features = 0, the haiku terminator). Every byte 0..255 indexes
//! this table, so lookups never trap.

use crate::features;
use crate::DictionaryEntry;

/// The static dictionary. `DICTIONARY[i]` is the entry for token byte `i`.
pub static DICTIONARY: [DictionaryEntry; 256] = [
    DictionaryEntry { token: b"NIL", features: 0 }, // 0
    DictionaryEntry { token: b"a", features: features::DETS }, // 1
    DictionaryEntry { token: b"the", features: features::DETS }, // 2
    DictionaryEntry { token: b"one", features: features::DETS }, // 3
    DictionaryEntry { token: b"this", features: features::DETS }, // 4
    DictionaryEntry { token: b"that", features: features::DETS }, // 5
    DictionaryEntry { token: b"every", features: features::DETS }, // 6
    DictionaryEntry { token: b"the", features: features::DETPL }, // 7
    DictionaryEntry { token: b"some", features: features::DETPL }, // 8
    DictionaryEntry { token: b"these", features: features::DETPL }, // 9
    DictionaryEntry { token: b"those", features: features::DETPL }, // 10
    DictionaryEntry { token: b"many", features: features::DETPL }, // 11
    DictionaryEntry { token: b"several", features: features::DETPL }, // 12
    DictionaryEntry { token: b"quiet", features: features::ADJ }, // 13
    DictionaryEntry { token: b"cold", features: features::ADJ }, // 14
    DictionaryEntry { token: b"golden", features: features::ADJ }, // 15
    DictionaryEntry { token: b"silent", features: features::ADJ }, // 16
    DictionaryEntry { token: b"gentle", features: features::ADJ }, // 17
    DictionaryEntry { token: b"soft", features: features::ADJ }, // 18
    DictionaryEntry { token: b"fading", features: features::ADJ }, // 19
    DictionaryEntry { token: b"endless", features: features::ADJ }, // 20
    DictionaryEntry { token: b"ancient", features: features::ADJ }, // 21
    DictionaryEntry { token: b"hidden", features: features::ADJ }, // 22
    DictionaryEntry { token: b"bright", features: features::ADJ }, // 23
    DictionaryEntry { token: b"dark", features: features::ADJ }, // 24
    DictionaryEntry { token: b"distant", features: features::ADJ }, // 25
    DictionaryEntry { token: b"broken", features: features::ADJ }, // 26
    DictionaryEntry { token: b"still", features: features::ADJ }, // 27
    DictionaryEntry { token: b"empty", features: features::ADJ }, // 28
    DictionaryEntry { token: b"fragile", features: features::ADJ }, // 29
    DictionaryEntry { token: b"lonely", features: features::ADJ }, // 30
    DictionaryEntry { token: b"faint", features: features::ADJ }, // 31
    DictionaryEntry { token: b"deep", features: features::ADJ }, // 32
    DictionaryEntry { token: b"pale", features: features::ADJ }, // 33
    DictionaryEntry { token: b"sudden", features: features::ADJ }, // 34
    DictionaryEntry { token: b"restless", features: features::ADJ }, // 35
    DictionaryEntry { token: b"tender", features: features::ADJ }, // 36
    DictionaryEntry { token: b"wild", features: features::ADJ }, // 37
    DictionaryEntry { token: b"frozen", features: features::ADJ }, // 38
    DictionaryEntry { token: b"weary", features: features::ADJ }, // 39
    DictionaryEntry { token: b"calm", features: features::ADJ }, // 40
    DictionaryEntry { token: b"vivid", features: features::ADJ }, // 41
    DictionaryEntry { token: b"slow", features: features::ADJ }, // 42
    DictionaryEntry { token: b"moon", features: features::NS }, // 43
    DictionaryEntry { token: b"river", features: features::NS }, // 44
    DictionaryEntry { token: b"stone", features: features::NS }, // 45
    DictionaryEntry { token: b"leaf", features: features::NS }, // 46
    DictionaryEntry { token: b"wind", features: features::NS }, // 47
    DictionaryEntry { token: b"shadow", features: features::NS }, // 48
    DictionaryEntry { token: b"mountain", features: features::NS }, // 49
    DictionaryEntry { token: b"star", features: features::NS }, // 50
    DictionaryEntry { token: b"cloud", features: features::NS }, // 51
    DictionaryEntry { token: b"flame", features: features::NS }, // 52
    DictionaryEntry { token: b"frost", features: features::NS }, // 53
    DictionaryEntry { token: b"petal", features: features::NS }, // 54
    DictionaryEntry { token: b"branch", features: features::NS }, // 55
    DictionaryEntry { token: b"ocean", features: features::NS }, // 56
    DictionaryEntry { token: b"valley", features: features::NS }, // 57
    DictionaryEntry { token: b"sparrow", features: features::NS }, // 58
    DictionaryEntry { token: b"heron", features: features::NS }, // 59
    DictionaryEntry { token: b"willow", features: features::NS }, // 60
    DictionaryEntry { token: b"lantern", features: features::NS }, // 61
    DictionaryEntry { token: b"temple", features: features::NS }, // 62
    DictionaryEntry { token: b"ember", features: features::NS }, // 63
    DictionaryEntry { token: b"mist", features: features::NS }, // 64
    DictionaryEntry { token: b"dewdrop", features: features::NS }, // 65
    DictionaryEntry { token: b"reed", features: features::NS }, // 66
    DictionaryEntry { token: b"cicada", features: features::NS }, // 67
    DictionaryEntry { token: b"crow", features: features::NS }, // 68
    DictionaryEntry { token: b"bell", features: features::NS }, // 69
    DictionaryEntry { token: b"path", features: features::NS }, // 70
    DictionaryEntry { token: b"bridge", features: features::NS }, // 71
    DictionaryEntry { token: b"well", features: features::NS }, // 72
    DictionaryEntry { token: b"stars", features: features::NPL }, // 73
    DictionaryEntry { token: b"leaves", features: features::NPL }, // 74
    DictionaryEntry { token: b"waves", features: features::NPL }, // 75
    DictionaryEntry { token: b"stones", features: features::NPL }, // 76
    DictionaryEntry { token: b"clouds", features: features::NPL }, // 77
    DictionaryEntry { token: b"petals", features: features::NPL }, // 78
    DictionaryEntry { token: b"branches", features: features::NPL }, // 79
    DictionaryEntry { token: b"sparrows", features: features::NPL }, // 80
    DictionaryEntry { token: b"shadows", features: features::NPL }, // 81
    DictionaryEntry { token: b"embers", features: features::NPL }, // 82
    DictionaryEntry { token: b"reeds", features: features::NPL }, // 83
    DictionaryEntry { token: b"cicadas", features: features::NPL }, // 84
    DictionaryEntry { token: b"crows", features: features::NPL }, // 85
    DictionaryEntry { token: b"bells", features: features::NPL }, // 86
    DictionaryEntry { token: b"paths", features: features::NPL }, // 87
    DictionaryEntry { token: b"hills", features: features::NPL }, // 88
    DictionaryEntry { token: b"fields", features: features::NPL }, // 89
    DictionaryEntry { token: b"ripples", features: features::NPL }, // 90
    DictionaryEntry { token: b"echoes", features: features::NPL }, // 91
    DictionaryEntry { token: b"footsteps", features: features::NPL }, // 92
    DictionaryEntry { token: b"rain", features: features::MASS }, // 93
    DictionaryEntry { token: b"snow", features: features::MASS }, // 94
    DictionaryEntry { token: b"silence", features: features::MASS }, // 95
    DictionaryEntry { token: b"dusk", features: features::MASS }, // 96
    DictionaryEntry { token: b"dawn", features: features::MASS }, // 97
    DictionaryEntry { token: b"fog", features: features::MASS }, // 98
    DictionaryEntry { token: b"smoke", features: features::MASS }, // 99
    DictionaryEntry { token: b"frost", features: features::MASS }, // 100
    DictionaryEntry { token: b"moonlight", features: features::MASS }, // 101
    DictionaryEntry { token: b"sunlight", features: features::MASS }, // 102
    DictionaryEntry { token: b"twilight", features: features::MASS }, // 103
    DictionaryEntry { token: b"thunder", features: features::MASS }, // 104
    DictionaryEntry { token: b"ash", features: features::MASS }, // 105
    DictionaryEntry { token: b"dew", features: features::MASS }, // 106
    DictionaryEntry { token: b"sheep", features: features::AMB | features::NS | features::NPL }, // 107
    DictionaryEntry { token: b"fish", features: features::AMB | features::NS | features::NPL }, // 108
    DictionaryEntry { token: b"deer", features: features::AMB | features::NS | features::NPL }, // 109
    DictionaryEntry { token: b"koi", features: features::AMB | features::NS | features::NPL }, // 110
    DictionaryEntry { token: b"geese", features: features::AMB | features::NS | features::NPL }, // 111
    DictionaryEntry { token: b"dawn", features: features::TIMED | features::NS }, // 112
    DictionaryEntry { token: b"noon", features: features::TIMED | features::NS }, // 113
    DictionaryEntry { token: b"dusk", features: features::TIMED | features::NS }, // 114
    DictionaryEntry { token: b"midnight", features: features::TIMED | features::NS }, // 115
    DictionaryEntry { token: b"morning", features: features::TIMED | features::NS }, // 116
    DictionaryEntry { token: b"evening", features: features::TIMED | features::NS }, // 117
    DictionaryEntry { token: b"twilight", features: features::TIMED | features::NS }, // 118
    DictionaryEntry { token: b"nightfall", features: features::TIMED | features::NS }, // 119
    DictionaryEntry { token: b"spring", features: features::TIMEY | features::NS }, // 120
    DictionaryEntry { token: b"summer", features: features::TIMEY | features::NS }, // 121
    DictionaryEntry { token: b"autumn", features: features::TIMEY | features::NS }, // 122
    DictionaryEntry { token: b"winter", features: features::TIMEY | features::NS }, // 123
    DictionaryEntry { token: b"solstice", features: features::TIMEY | features::NS }, // 124
    DictionaryEntry { token: b"equinox", features: features::TIMEY | features::NS }, // 125
    DictionaryEntry { token: b"monsoon", features: features::TIMEY | features::NS }, // 126
    DictionaryEntry { token: b"falling", features: features::ING }, // 127
    DictionaryEntry { token: b"drifting", features: features::ING }, // 128
    DictionaryEntry { token: b"fading", features: features::ING }, // 129
    DictionaryEntry { token: b"rising", features: features::ING }, // 130
    DictionaryEntry { token: b"whispering", features: features::ING }, // 131
    DictionaryEntry { token: b"gleaming", features: features::ING }, // 132
    DictionaryEntry { token: b"trembling", features: features::ING }, // 133
    DictionaryEntry { token: b"wandering", features: features::ING }, // 134
    DictionaryEntry { token: b"settling", features: features::ING }, // 135
    DictionaryEntry { token: b"glowing", features: features::ING }, // 136
    DictionaryEntry { token: b"weeping", features: features::ING }, // 137
    DictionaryEntry { token: b"waiting", features: features::ING }, // 138
    DictionaryEntry { token: b"dreaming", features: features::ING }, // 139
    DictionaryEntry { token: b"lingering", features: features::ING }, // 140
    DictionaryEntry { token: b"floating", features: features::ING }, // 141
    DictionaryEntry { token: b"burning", features: features::ING }, // 142
    DictionaryEntry { token: b"breathing", features: features::ING }, // 143
    DictionaryEntry { token: b"calling", features: features::ING }, // 144
    DictionaryEntry { token: b"folding", features: features::ING }, // 145
    DictionaryEntry { token: b"sleeping", features: features::ING }, // 146
    DictionaryEntry { token: b"fall", features: features::INF }, // 147
    DictionaryEntry { token: b"drift", features: features::INF }, // 148
    DictionaryEntry { token: b"fade", features: features::INF }, // 149
    DictionaryEntry { token: b"rise", features: features::INF }, // 150
    DictionaryEntry { token: b"whisper", features: features::INF }, // 151
    DictionaryEntry { token: b"gleam", features: features::INF }, // 152
    DictionaryEntry { token: b"tremble", features: features::INF }, // 153
    DictionaryEntry { token: b"wander", features: features::INF }, // 154
    DictionaryEntry { token: b"settle", features: features::INF }, // 155
    DictionaryEntry { token: b"glow", features: features::INF }, // 156
    DictionaryEntry { token: b"weep", features: features::INF }, // 157
    DictionaryEntry { token: b"wait", features: features::INF }, // 158
    DictionaryEntry { token: b"dream", features: features::INF }, // 159
    DictionaryEntry { token: b"linger", features: features::INF }, // 160
    DictionaryEntry { token: b"float", features: features::INF }, // 161
    DictionaryEntry { token: b"burn", features: features::INF }, // 162
    DictionaryEntry { token: b"flows", features: features::MOTION }, // 163
    DictionaryEntry { token: b"drifts", features: features::MOTION }, // 164
    DictionaryEntry { token: b"soars", features: features::MOTION }, // 165
    DictionaryEntry { token: b"glides", features: features::MOTION }, // 166
    DictionaryEntry { token: b"falls", features: features::MOTION }, // 167
    DictionaryEntry { token: b"climbs", features: features::MOTION }, // 168
    DictionaryEntry { token: b"wanders", features: features::MOTION }, // 169
    DictionaryEntry { token: b"returns", features: features::MOTION }, // 170
    DictionaryEntry { token: b"departs", features: features::MOTION }, // 171
    DictionaryEntry { token: b"lingers", features: features::MOTION }, // 172
    DictionaryEntry { token: b"crosses", features: features::MOTION }, // 173
    DictionaryEntry { token: b"descends", features: features::MOTION }, // 174
    DictionaryEntry { token: b"dawn", features: features::AT }, // 175
    DictionaryEntry { token: b"noon", features: features::AT }, // 176
    DictionaryEntry { token: b"midnight", features: features::AT }, // 177
    DictionaryEntry { token: b"sunset", features: features::AT }, // 178
    DictionaryEntry { token: b"sunrise", features: features::AT }, // 179
    DictionaryEntry { token: b"water", features: features::ON }, // 180
    DictionaryEntry { token: b"stone", features: features::ON }, // 181
    DictionaryEntry { token: b"snow", features: features::ON }, // 182
    DictionaryEntry { token: b"ice", features: features::ON }, // 183
    DictionaryEntry { token: b"glass", features: features::ON }, // 184
    DictionaryEntry { token: b"earth", features: features::ON }, // 185
    DictionaryEntry { token: b"silence", features: features::IN }, // 186
    DictionaryEntry { token: b"autumn", features: features::IN }, // 187
    DictionaryEntry { token: b"winter", features: features::IN }, // 188
    DictionaryEntry { token: b"shadow", features: features::IN }, // 189
    DictionaryEntry { token: b"the distance", features: features::IN }, // 190
    DictionaryEntry { token: b"the mist", features: features::IN }, // 191
    DictionaryEntry { token: b"beyond", features: features::PREP }, // 192
    DictionaryEntry { token: b"beneath", features: features::PREP }, // 193
    DictionaryEntry { token: b"above", features: features::PREP }, // 194
    DictionaryEntry { token: b"within", features: features::PREP }, // 195
    DictionaryEntry { token: b"beside", features: features::PREP }, // 196
    DictionaryEntry { token: b"across", features: features::PREP }, // 197
    DictionaryEntry { token: b"through", features: features::PREP }, // 198
    DictionaryEntry { token: b"and", features: features::OP }, // 199
    DictionaryEntry { token: b"or", features: features::OP }, // 200
    DictionaryEntry { token: b"yet", features: features::OP }, // 201
    DictionaryEntry { token: b"but", features: features::OP }, // 202
    DictionaryEntry { token: b"then", features: features::OP }, // 203
    DictionaryEntry { token: b"\n", features: features::OP }, // 204
    DictionaryEntry { token: b"'s", features: features::OP }, // 205
    DictionaryEntry { token: b"\x08's", features: features::OP }, // 206
    DictionaryEntry { token: b"\x08.", features: features::OP }, // 207
    DictionaryEntry { token: b"\x08,", features: features::OP }, // 208
    DictionaryEntry { token: b"murmuring", features: features::ADJ }, // 209
    DictionaryEntry { token: b"glistening", features: features::ADJ }, // 210
    DictionaryEntry { token: b"withered", features: features::ADJ }, // 211
    DictionaryEntry { token: b"luminous", features: features::ADJ }, // 212
    DictionaryEntry { token: b"shivering", features: features::ADJ }, // 213
    DictionaryEntry { token: b"drowsy", features: features::ADJ }, // 214
    DictionaryEntry { token: b"brittle", features: features::ADJ }, // 215
    DictionaryEntry { token: b"hushed", features: features::ADJ }, // 216
    DictionaryEntry { token: b"amber", features: features::ADJ }, // 217
    DictionaryEntry { token: b"ashen", features: features::ADJ }, // 218
    DictionaryEntry { token: b"threadbare", features: features::ADJ }, // 219
    DictionaryEntry { token: b"feathered", features: features::ADJ }, // 220
    DictionaryEntry { token: b"salt-worn", features: features::ADJ }, // 221
    DictionaryEntry { token: b"weathered", features: features::ADJ }, // 222
    DictionaryEntry { token: b"pine", features: features::NS }, // 223
    DictionaryEntry { token: b"maple", features: features::NS }, // 224
    DictionaryEntry { token: b"pond", features: features::NS }, // 225
    DictionaryEntry { token: b"harbor", features: features::NS }, // 226
    DictionaryEntry { token: b"meadow", features: features::NS }, // 227
    DictionaryEntry { token: b"orchard", features: features::NS }, // 228
    DictionaryEntry { token: b"canyon", features: features::NS }, // 229
    DictionaryEntry { token: b"marsh", features: features::NS }, // 230
    DictionaryEntry { token: b"thicket", features: features::NS }, // 231
    DictionaryEntry { token: b"hollow", features: features::NS }, // 232
    DictionaryEntry { token: b"ridge", features: features::NS }, // 233
    DictionaryEntry { token: b"cove", features: features::NS }, // 234
    DictionaryEntry { token: b"glade", features: features::NS }, // 235
    DictionaryEntry { token: b"ferry", features: features::NS }, // 236
    DictionaryEntry { token: b"lighthouse", features: features::NS }, // 237
    DictionaryEntry { token: b"dune", features: features::NS }, // 238
    DictionaryEntry { token: b"grove", features: features::NS }, // 239
    DictionaryEntry { token: b"estuary", features: features::NS }, // 240
    DictionaryEntry { token: b"tideline", features: features::NS }, // 241
    DictionaryEntry { token: b"gully", features: features::NS }, // 242
    DictionaryEntry { token: b"birchwood", features: features::NS }, // 243
    DictionaryEntry { token: b"driftwood", features: features::NS }, // 244
    DictionaryEntry { token: b"tern", features: features::NS }, // 245
    DictionaryEntry { token: b"osprey", features: features::NS }, // 246
    DictionaryEntry { token: b"kestrel", features: features::NS }, // 247
    DictionaryEntry { token: b"murmuring", features: features::ING }, // 248
    DictionaryEntry { token: b"shimmering", features: features::ING }, // 249
    DictionaryEntry { token: b"withering", features: features::ING }, // 250
    DictionaryEntry { token: b"unfolding", features: features::ING }, // 251
    DictionaryEntry { token: b"scattering", features: features::ING }, // 252
    DictionaryEntry { token: b"hovering", features: features::ING }, // 253
    DictionaryEntry { token: b"tides", features: features::NPL }, // 254
    DictionaryEntry { token: b"sparks", features: features::NPL }, // 255
];
